//! Canonical storage object names.
//!
//! The mapping from `(video, from, to)` to an object name is pure and
//! deterministic; the existence of the named object is the sole
//! de-duplication mechanism for repeated part requests.

/// Storage key for a clipped part.
pub fn part_object_name(video: &str, from: i64, to: i64) -> String {
    format!("videos/{video}/{video}_{from}_{to}.mp4")
}

/// Storage key for the full source video.
pub fn source_object_name(video: &str) -> String {
    format!("videos/{video}/{video}.mp4")
}

/// Job-tracker key for a part.
pub fn job_key(video: &str, from: i64, to: i64) -> String {
    format!("{video}_{from}_{to}")
}

/// File name of a freshly cut part in the working directory.
pub fn part_file_name(video: &str, from: i64, to: i64) -> String {
    format!("{video}_{from}_{to}.mp4")
}

/// File name of a downloaded source video in the working directory.
pub fn source_file_name(video: &str) -> String {
    format!("{video}.mp4")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_object_name() {
        assert_eq!(part_object_name("talk", 3, 9), "videos/talk/talk_3_9.mp4");
    }

    #[test]
    fn test_source_object_name() {
        assert_eq!(source_object_name("talk"), "videos/talk/talk.mp4");
    }

    #[test]
    fn test_distinct_keys_distinct_names() {
        // the (video, from, to) domain must stay collision-free
        let names = [
            part_object_name("a", 1, 2),
            part_object_name("a", 1, 3),
            part_object_name("a", 2, 3),
            part_object_name("b", 1, 2),
        ];
        for (i, left) in names.iter().enumerate() {
            for right in &names[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn test_job_key() {
        assert_eq!(job_key("talk", 3, 9), "talk_3_9");
    }

    #[test]
    fn test_working_file_names() {
        assert_eq!(part_file_name("talk", 3, 9), "talk_3_9.mp4");
        assert_eq!(source_file_name("talk"), "talk.mp4");
    }
}
