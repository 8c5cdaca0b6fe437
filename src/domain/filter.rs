use crate::domain::email::Email;

/// Lazily yields the emails a mailbox view shows for `term`: never archived
/// ones, and only those whose subject or content contains the term
/// (case-insensitive). An empty term keeps every live email.
pub fn visible_emails<'a>(
    emails: &'a [Email],
    term: &str,
) -> impl Iterator<Item = &'a Email> + use<'a> {
    let needle = term.to_lowercase();
    emails.iter().filter(move |e| {
        !e.is_archived
            && (e.subject.to_lowercase().contains(&needle)
                || e.content.to_lowercase().contains(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn email(id: u64, subject: &str, content: &str, archived: bool) -> Email {
        Email {
            id,
            subject: subject.into(),
            preview: String::new(),
            content: content.into(),
            date: Utc::now(),
            is_read: false,
            is_starred: false,
            is_archived: archived,
        }
    }

    fn subjects<'a>(it: impl Iterator<Item = &'a Email>) -> Vec<&'a str> {
        it.map(|e| e.subject.as_str()).collect()
    }

    #[test]
    fn test_term_matches_subject_and_skips_archived() {
        let emails = vec![email(1, "Hello", "", false), email(2, "Bye", "", true)];
        assert_eq!(subjects(visible_emails(&emails, "hel")), vec!["Hello"]);
    }

    #[test]
    fn test_empty_term_keeps_live_emails_in_order() {
        let emails = vec![
            email(1, "c", "", false),
            email(2, "a", "", true),
            email(3, "b", "", false),
        ];
        assert_eq!(subjects(visible_emails(&emails, "")), vec!["c", "b"]);
    }

    #[test]
    fn test_term_matches_content_case_insensitively() {
        let emails = vec![
            email(1, "Greetings", "Snow is FALLING", false),
            email(2, "Other", "nothing here", false),
        ];
        assert_eq!(subjects(visible_emails(&emails, "falling")), vec!["Greetings"]);
        assert_eq!(subjects(visible_emails(&emails, "GREET")), vec!["Greetings"]);
    }

    #[test]
    fn test_archived_hidden_even_when_matching() {
        let emails = vec![email(1, "Hello", "hello", true)];
        assert_eq!(visible_emails(&emails, "hello").count(), 0);
    }

    #[test]
    fn test_non_ascii_term() {
        let emails = vec![email(1, "Добро пожаловать", "", false)];
        assert_eq!(visible_emails(&emails, "ДОБРО").count(), 1);
    }
}
