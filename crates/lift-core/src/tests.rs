//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::{CoreError, Direction, Floor};

    #[test]
    fn range_checked() {
        assert_eq!(Floor::new(0).unwrap(), Floor::GROUND);
        assert_eq!(Floor::new(3).unwrap(), Floor::TOP);
        assert_eq!(Floor::new(4), Err(CoreError::FloorOutOfRange(4)));
        assert_eq!(Floor::new(-1), Err(CoreError::FloorOutOfRange(-1)));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Floor::new(0).unwrap();
        let b = Floor::new(3).unwrap();
        assert_eq!(a.distance(b), 3);
        assert_eq!(b.distance(a), 3);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn ahead_up_is_nearest_first() {
        let floors: Vec<u8> = Floor::new(1).unwrap().ahead(Direction::Up).map(Floor::number).collect();
        assert_eq!(floors, [2, 3]);
    }

    #[test]
    fn ahead_down_is_nearest_first() {
        let floors: Vec<u8> = Floor::new(2).unwrap().ahead(Direction::Down).map(Floor::number).collect();
        assert_eq!(floors, [1, 0]);
    }

    #[test]
    fn nothing_ahead_at_the_ends() {
        assert_eq!(Floor::TOP.ahead(Direction::Up).count(), 0);
        assert_eq!(Floor::GROUND.ahead(Direction::Down).count(), 0);
    }

    #[test]
    fn on_way_excludes_start_includes_target() {
        let f = |n| Floor::new(n).unwrap();
        assert!(f(1).is_on_way(f(0), f(2), Direction::Up));
        assert!(f(2).is_on_way(f(0), f(2), Direction::Up));
        assert!(!f(0).is_on_way(f(0), f(2), Direction::Up));
        assert!(!f(3).is_on_way(f(0), f(2), Direction::Up));

        assert!(f(1).is_on_way(f(3), f(0), Direction::Down));
        assert!(f(0).is_on_way(f(3), f(0), Direction::Down));
        assert!(!f(3).is_on_way(f(3), f(0), Direction::Down));
    }

    #[test]
    fn display() {
        assert_eq!(Floor::TOP.to_string(), "3");
    }
}

#[cfg(test)]
mod direction {
    use crate::{CoreError, Direction};

    #[test]
    fn flag_roundtrip() {
        assert_eq!(Direction::from_flag(1).unwrap(), Direction::Up);
        assert_eq!(Direction::from_flag(0).unwrap(), Direction::Down);
        assert_eq!(Direction::Up.flag(), 1);
        assert_eq!(Direction::from_flag(2), Err(CoreError::InvalidDirection(2)));
    }

    #[test]
    fn reversed_twice_is_identity() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed().reversed(), Direction::Down);
    }

    #[test]
    fn parses_names_and_flags() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" down ".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("0".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!("-1".parse::<Direction>(), Err(CoreError::InvalidDirection(-1)));
    }
}

#[cfg(test)]
mod event {
    use crate::{Event, Floor, WaitStats};

    fn floor(n: i64) -> Floor {
        Floor::new(n).unwrap()
    }

    #[test]
    fn display_matches_log_lines() {
        let mv = Event::Move { floor: floor(1), time_taken: 1, total_time: 4 };
        assert_eq!(mv.to_string(), "Moving to floor 1 (Time taken 1 second, Total time: 4).");

        let up = Event::Pickup { floor: floor(1), count: 2 };
        assert_eq!(up.to_string(), "Picking up 2 passenger(s) on floor 1");

        let down = Event::Dropoff { floor: floor(2), count: 1 };
        assert_eq!(down.to_string(), "Dropping off 1 passenger(s) on floor 2.");
    }

    #[test]
    fn finished_line_reports_all_waits() {
        let stats = WaitStats {
            total_time:             3,
            onboard_wait:           4,
            offboard_wait:          1,
            initial_passenger_wait: 2,
        };
        let done = Event::Finished { floor: floor(3), onboard: 0, waiting: 0, stats };
        let line = done.to_string();
        assert!(line.starts_with("Final state: Lift at floor 3. Passengers in lift: 0."), "{line}");
        assert!(line.contains("inside the lift: 4."), "{line}");
        assert!(line.contains("waiting to be picked up: 1."), "{line}");
        assert!(line.contains("originally in the lift: 2."), "{line}");
    }

    #[test]
    fn accessors() {
        let e = Event::Dropoff { floor: floor(2), count: 0 };
        assert_eq!(e.floor(), floor(2));
        assert_eq!(e.kind(), "dropoff");
        assert!(!e.is_finished());
    }
}
