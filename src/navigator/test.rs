use approx::assert_relative_eq;

use crate::geo::{Coordinate, GeoError};
use crate::hysteresis::Latches;
use crate::navigator::{Alert, AlertKind, AlertSink, Navigator};
use crate::trip::{SegmentChange, SegmentId, Service, ServiceId, TripError};
use crate::util::fixture;
use crate::Error;

#[derive(Debug, Default)]
struct Recorder {
    alerts: Vec<Alert>,
    changes: Vec<SegmentChange>,
}

impl AlertSink for Recorder {
    fn alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    fn segment_changed(&mut self, change: SegmentChange) {
        self.changes.push(change);
    }
}

fn kinds(alerts: &[Alert]) -> Vec<(SegmentId, AlertKind)> {
    alerts.iter().map(|alert| (alert.segment, alert.kind)).collect()
}

#[test_log::test]
fn rides_a_two_segment_trip() {
    let service = fixture::service(2);
    let (first, second) = (service.segments[0].clone(), service.segments[1].clone());

    let mut navigator = Navigator::new(Recorder::default());
    navigator.start_trip(service).unwrap();
    assert_eq!(navigator.current_index(), 0);

    for distance in [300.0, 40.0, 15.0] {
        navigator.on_position(fixture::fix(&first, distance, 20.0)).unwrap();
    }

    assert_eq!(
        kinds(&navigator.sink().alerts),
        vec![
            (SegmentId(10), AlertKind::Ready),
            (SegmentId(10), AlertKind::Arrival)
        ]
    );
    assert!(navigator.is_waiting_for_confirm());

    let change = navigator.confirm_arrival().unwrap();
    assert_eq!(change.next, Some(SegmentId(11)));
    assert_eq!(navigator.current_index(), 1);
    assert!(!navigator.is_waiting_for_confirm());
    assert_eq!(navigator.recorded_distances().len(), 1);
    assert_relative_eq!(navigator.recorded_distances()[0], 285.0, max_relative = 1e-3);

    for distance in [300.0, 40.0, 15.0] {
        navigator.on_position(fixture::fix(&second, distance, 20.0)).unwrap();
    }

    assert_eq!(navigator.sink().alerts.len(), 4);
    assert_eq!(navigator.sink().alerts[3].kind, AlertKind::Arrival);
    assert_eq!(navigator.sink().alerts[3].segment, SegmentId(11));

    let change = navigator.confirm_arrival().unwrap();
    assert_eq!(change.next, None);

    assert!(navigator.is_finished());
    assert_eq!(navigator.current_segment_id(), None);
    assert_eq!(navigator.current_service_id(), None);
    assert_eq!(navigator.recorded_distances().len(), 2);
    assert_eq!(navigator.sink().changes.len(), 2);
}

#[test]
fn positions_are_ignored_while_awaiting_confirmation() {
    let service = fixture::service(2);
    let segment = service.segments[0].clone();

    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(service).unwrap();

    navigator.on_position(fixture::fix(&segment, 200.0, 20.0)).unwrap();
    let arrival = navigator.on_position(fixture::fix(&segment, 10.0, 20.0)).unwrap();
    assert_eq!(arrival.map(|alert| alert.kind), Some(AlertKind::Arrival));

    let latches = navigator.session().hysteresis().map(|h| h.latches());
    let travelled = navigator.session().travelled();

    for distance in [10.0, 5.0, 30.0, 45.0, 80.0, 30.0, 10.0] {
        let alert = navigator.on_position(fixture::fix(&segment, distance, 20.0)).unwrap();
        assert_eq!(alert, None);
    }

    assert_eq!(navigator.sink().len(), 2);
    assert_eq!(navigator.session().hysteresis().map(|h| h.latches()), latches);
    assert_eq!(navigator.session().travelled(), travelled);
    assert_eq!(navigator.current_index(), 0);
}

#[test]
fn ready_takes_priority_over_arrival() {
    let service = fixture::service(1);
    let segment = service.segments[0].clone();

    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(service).unwrap();

    // The first fix is already inside the inner band.
    let alert = navigator.on_position(fixture::fix(&segment, 10.0, 20.0)).unwrap();
    assert_eq!(alert.map(|alert| alert.kind), Some(AlertKind::Ready));
    assert!(!navigator.is_waiting_for_confirm());

    let latches = navigator.session().hysteresis().unwrap().latches();
    assert_eq!(latches, Latches::READY);

    let alert = navigator.on_position(fixture::fix(&segment, 8.0, 20.0)).unwrap();
    assert_eq!(alert.map(|alert| alert.kind), Some(AlertKind::Arrival));
    assert!(navigator.is_waiting_for_confirm());
}

#[test]
fn slow_arrival_needs_a_second_inner_fix() {
    let service = fixture::service(1);
    let segment = service.segments[0].clone();

    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(service).unwrap();

    navigator.on_position(fixture::fix(&segment, 150.0, 5.0)).unwrap();
    assert_eq!(navigator.on_position(fixture::fix(&segment, 15.0, 5.0)).unwrap(), None);

    let alert = navigator.on_position(fixture::fix(&segment, 12.0, 20.0)).unwrap();
    assert_eq!(alert.map(|alert| alert.kind), Some(AlertKind::Arrival));
}

#[test]
fn invalid_position_is_rejected_without_mutation() {
    let service = fixture::service(1);
    let segment = service.segments[0].clone();

    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(service).unwrap();
    navigator.on_position(fixture::fix(&segment, 400.0, 20.0)).unwrap();

    let before = navigator.snapshot();
    let result = navigator.on_position(Coordinate::from_degree_unchecked(120.0, 0.0));

    assert_eq!(
        result,
        Err(Error::Geo(GeoError::InvalidCoordinate { lat: 120.0, lng: 0.0 }))
    );
    assert_eq!(navigator.snapshot(), before);
    assert!(navigator.sink().is_empty());
}

#[test]
fn last_distances_track_both_reference_points() {
    let service = fixture::service(1);
    let segment = service.segments[0].clone();

    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(service).unwrap();
    assert_eq!(navigator.last_distances(), None);

    navigator.on_position(fixture::fix(&segment, 500.0, 10.0)).unwrap();

    let distances = navigator.last_distances().unwrap();
    assert_relative_eq!(distances.to_approach, 500.0, max_relative = 1e-6);
    assert_relative_eq!(
        distances.to_final_stop,
        500.0 + fixture::FINAL_STOP_SPACING,
        max_relative = 1e-3
    );
}

#[test]
fn skip_advances_without_an_arrival() {
    let mut navigator = Navigator::new(Recorder::default());
    navigator.start_trip(fixture::service(3)).unwrap();

    let change = navigator.skip_segment().unwrap();
    assert_eq!(change.completed, SegmentId(10));
    assert_eq!(navigator.current_segment_id(), Some(SegmentId(11)));

    navigator.skip_segment().unwrap();
    navigator.skip_segment().unwrap();
    assert!(navigator.is_finished());
    assert_eq!(navigator.recorded_distances().len(), 3);

    assert_eq!(
        navigator.skip_segment(),
        Err(Error::Trip(TripError::NoActiveTrip))
    );
    assert!(navigator.sink().alerts.is_empty());
    assert_eq!(navigator.sink().changes.len(), 3);
}

#[test]
fn skip_bypasses_a_pending_confirmation() {
    let service = fixture::service(2);
    let segment = service.segments[0].clone();

    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(service).unwrap();
    navigator.on_position(fixture::fix(&segment, 200.0, 20.0)).unwrap();
    navigator.on_position(fixture::fix(&segment, 10.0, 20.0)).unwrap();
    assert!(navigator.is_waiting_for_confirm());

    navigator.skip_segment().unwrap();

    assert!(!navigator.is_waiting_for_confirm());
    assert_eq!(navigator.current_index(), 1);
}

#[test]
fn idle_navigator_ignores_positions_and_confirmations() {
    let mut navigator = Navigator::new(Vec::<Alert>::new());
    let fix = Coordinate::from_degree(0.0, 0.0).unwrap();

    assert_eq!(navigator.on_position(fix), Ok(None));
    assert_eq!(
        navigator.confirm_arrival(),
        Err(Error::Trip(TripError::NoActiveTrip))
    );
    assert!(!navigator.is_finished());
    assert_eq!(navigator.current_segment_id(), None);
}

#[test]
fn empty_service_leaves_the_navigator_idle() {
    let mut navigator = Navigator::new(Vec::<Alert>::new());

    assert_eq!(
        navigator.start_trip(Service { id: ServiceId(9), segments: vec![] }),
        Err(Error::Trip(TripError::EmptyService(ServiceId(9))))
    );
    assert_eq!(navigator.current_service_id(), None);
}

#[test]
fn cancel_returns_to_idle() {
    let mut navigator = Navigator::new(Vec::<Alert>::new());
    navigator.start_trip(fixture::service(2)).unwrap();
    navigator.cancel_trip();

    assert_eq!(navigator.current_segment_id(), None);
    assert!(!navigator.is_finished());
    assert_eq!(navigator.skip_segment(), Err(Error::Trip(TripError::NoActiveTrip)));
}

#[cfg(feature = "actor")]
mod actor {
    use tokio::sync::mpsc;

    use crate::navigator::{Alert, AlertKind, SessionHandle};
    use crate::trip::SegmentId;
    use crate::util::fixture;
    use crate::Error;

    #[tokio::test]
    async fn session_task_applies_commands_in_order() {
        let service = fixture::service(2);
        let segment = service.segments[0].clone();

        let (sender, mut alerts) = mpsc::unbounded_channel::<Alert>();
        let (handle, task) = SessionHandle::spawn(sender);

        handle.start_trip(service).await.unwrap();

        let feeder = handle.clone();
        let fixes = [300.0, 200.0, 90.0, 40.0, 15.0]
            .map(|distance| fixture::fix(&segment, distance, 20.0));
        let positions = tokio::spawn(async move {
            let mut raised = vec![];
            for fix in fixes {
                raised.push(feeder.position(fix).await.unwrap());
            }
            raised
        });

        let raised = positions.await.unwrap();
        assert_eq!(raised.iter().flatten().count(), 2);

        assert_eq!(alerts.recv().await.map(|a| a.kind), Some(AlertKind::Ready));
        assert_eq!(alerts.recv().await.map(|a| a.kind), Some(AlertKind::Arrival));

        let snapshot = handle.snapshot().await.unwrap();
        assert!(snapshot.waiting_for_confirm);
        assert_eq!(snapshot.segment, Some(SegmentId(10)));

        handle.confirm_arrival().await.unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.index, 1);
        assert_eq!(snapshot.recorded_distances.len(), 1);

        handle.skip_segment().await.unwrap();
        assert!(handle.snapshot().await.unwrap().finished);

        drop(handle);
        let navigator = task.await.unwrap();
        assert!(navigator.is_finished());
    }

    #[tokio::test]
    async fn closed_session_reports_closed() {
        let (handle, task) = SessionHandle::spawn(Vec::<Alert>::new());
        task.abort();
        let _ = task.await;

        assert_eq!(handle.snapshot().await, Err(Error::SessionClosed));
    }
}
