#[cfg(test)]
mod model_tests {
    use crate::models::{BugStatus, Priority};

    #[test]
    fn test_bug_status_from_str() {
        assert_eq!("open".parse::<BugStatus>().unwrap(), BugStatus::Open);
        assert_eq!("Open".parse::<BugStatus>().unwrap(), BugStatus::Open);
        assert_eq!(
            "in progress".parse::<BugStatus>().unwrap(),
            BugStatus::InProgress
        );
        assert_eq!(
            "In Progress".parse::<BugStatus>().unwrap(),
            BugStatus::InProgress
        );
        assert_eq!(
            "RESOLVED".parse::<BugStatus>().unwrap(),
            BugStatus::Resolved
        );

        assert!("inprogress".parse::<BugStatus>().is_err());
        assert!("closed".parse::<BugStatus>().is_err());
        assert!("".parse::<BugStatus>().is_err());
    }

    #[test]
    fn test_bug_status_default_is_open() {
        assert_eq!(BugStatus::default(), BugStatus::Open);
    }

    #[test]
    fn test_bug_status_as_str_round_trips() {
        for status in [BugStatus::Open, BugStatus::InProgress, BugStatus::Resolved] {
            assert_eq!(status.as_str().parse::<BugStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);

        assert!("urgent".parse::<Priority>().is_err());
        assert!(" low".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }
}
