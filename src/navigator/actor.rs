//! Runs a [`Navigator`] on its own task.
//!
//! Every interaction with the session is a message on a single channel,
//! consumed by one task in the order it was sent. Position fixes therefore
//! reach the hysteresis strictly in arrival order without any locking.
//! The task ends once every [`SessionHandle`] has been dropped.
//!
//! ```rust
//! use alight::navigator::{LogSink, SessionHandle};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (handle, task) = SessionHandle::spawn(LogSink);
//!
//! let snapshot = handle.snapshot().await.unwrap();
//! assert_eq!(snapshot.segment, None);
//!
//! drop(handle);
//! let _navigator = task.await.unwrap();
//! # }
//! ```

use log::debug;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::geo::Coordinate;
use crate::navigator::definition::{Alert, AlertSink, SessionSnapshot};
use crate::navigator::implementation::Navigator;
use crate::trip::{SegmentChange, Service};
use crate::Error;

/// Commands waiting beyond this are applied back-pressure.
const COMMAND_BUFFER: usize = 64;

type Reply<T> = oneshot::Sender<T>;

enum Command {
    Start(Service, Reply<Result<(), Error>>),
    Position(Coordinate, Reply<Result<Option<Alert>, Error>>),
    Confirm(Reply<Result<SegmentChange, Error>>),
    Skip(Reply<Result<SegmentChange, Error>>),
    Cancel(Reply<()>),
    Snapshot(Reply<SessionSnapshot>),
}

/// A cloneable handle onto a session running on its own task.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
}

impl SessionHandle {
    /// Spawns the session task onto the current runtime.
    ///
    /// The returned [`JoinHandle`] resolves to the navigator
    /// once every handle has been dropped.
    pub fn spawn<S>(sink: S) -> (SessionHandle, JoinHandle<Navigator<S>>)
    where
        S: AlertSink + Send + 'static,
    {
        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(run(Navigator::new(sink), receiver));

        (SessionHandle { commands }, task)
    }

    pub async fn start_trip(&self, service: Service) -> Result<(), Error> {
        self.request(|reply| Command::Start(service, reply)).await?
    }

    pub async fn position(&self, position: Coordinate) -> Result<Option<Alert>, Error> {
        self.request(|reply| Command::Position(position, reply)).await?
    }

    pub async fn confirm_arrival(&self) -> Result<SegmentChange, Error> {
        self.request(Command::Confirm).await?
    }

    pub async fn skip_segment(&self) -> Result<SegmentChange, Error> {
        self.request(Command::Skip).await?
    }

    pub async fn cancel_trip(&self) -> Result<(), Error> {
        self.request(Command::Cancel).await
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, Error> {
        self.request(Command::Snapshot).await
    }

    async fn request<T>(&self, command: impl FnOnce(Reply<T>) -> Command) -> Result<T, Error> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(command(reply))
            .await
            .map_err(|_| Error::SessionClosed)?;

        response.await.map_err(|_| Error::SessionClosed)
    }
}

async fn run<S>(mut navigator: Navigator<S>, mut commands: mpsc::Receiver<Command>) -> Navigator<S>
where
    S: AlertSink,
{
    while let Some(command) = commands.recv().await {
        // A dropped reply only means the caller stopped listening.
        match command {
            Command::Start(service, reply) => {
                let _ = reply.send(navigator.start_trip(service));
            }
            Command::Position(position, reply) => {
                let _ = reply.send(navigator.on_position(position));
            }
            Command::Confirm(reply) => {
                let _ = reply.send(navigator.confirm_arrival());
            }
            Command::Skip(reply) => {
                let _ = reply.send(navigator.skip_segment());
            }
            Command::Cancel(reply) => {
                navigator.cancel_trip();
                let _ = reply.send(());
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(navigator.snapshot());
            }
        }
    }

    debug!("All session handles dropped, stopping session task");
    navigator
}
