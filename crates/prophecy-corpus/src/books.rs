//! Prophetic books with frequent astronomical imagery

/// Old Testament prophetic books.
pub const OLD_TESTAMENT_PROPHETS: &[&str] = &[
    "Isaiah",
    "Jeremiah",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

/// New Testament books with substantial prophetic content.
pub const NEW_TESTAMENT_PROPHECY: &[&str] = &["Matthew", "Revelation"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_prophets_present() {
        for book in ["Isaiah", "Daniel", "Joel", "Ezekiel"] {
            assert!(OLD_TESTAMENT_PROPHETS.contains(&book));
        }
    }

    #[test]
    fn test_new_testament_prophecy_books() {
        assert!(NEW_TESTAMENT_PROPHECY.contains(&"Revelation"));
        assert!(NEW_TESTAMENT_PROPHECY.contains(&"Matthew"));
    }
}
