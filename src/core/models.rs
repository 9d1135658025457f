use chrono::{
    DateTime,
    NaiveDate,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use wana_kana::ConvertJapanese;

/// One book on the user's shelf, as stored in the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub translator: Option<String>,
    pub illustrator: Option<String>,
    pub started_at: Option<NaiveDate>,
    pub finished_at: Option<NaiveDate>,
}

impl Book {
    /// "著：author　訳：translator　絵：illustrator" for whichever credits exist.
    pub fn credits(&self) -> String {
        let mut parts = Vec::new();
        if let Some(author) = &self.author {
            parts.push(format!("著：{}", author));
        }
        if let Some(translator) = &self.translator {
            parts.push(format!("訳：{}", translator));
        }
        if let Some(illustrator) = &self.illustrator {
            parts.push(format!("絵：{}", illustrator));
        }
        parts.join("　")
    }

    pub fn reading_dates(&self) -> Option<String> {
        match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => {
                Some(format!("{} – {}", format_date(started), format_date(finished)))
            }
            (Some(started), None) => Some(format!("Started {}", format_date(started))),
            _ => None,
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Per-kanji stroke count recorded alongside a vocab entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeCount {
    #[serde(rename = "char")]
    pub kanji: String,
    pub strokes: Option<u8>,
}

/// One vocabulary entry recorded while reading a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabCard {
    pub word: String,
    pub reading: String,
    pub meaning: String,
    pub jlpt: Option<String>,
    #[serde(default)]
    pub is_common: bool,
    pub page_number: Option<u32>,
    pub chapter_number: Option<u32>,
    pub chapter_name: Option<String>,
    #[serde(default)]
    pub strokes: Vec<StrokeCount>,
    pub created_at: Option<DateTime<Utc>>,
}

impl VocabCard {
    /// Backend readings may come back in katakana; display is always hiragana.
    pub fn normalize_reading(&mut self) {
        if !self.reading.is_empty() {
            self.reading = self.reading.to_hiragana();
        }
    }

    /// Short badge text: "N3" for "jlpt-n3", the stored tag otherwise.
    pub fn jlpt_badge(&self) -> Option<String> {
        let tag = self.jlpt.as_deref()?;
        let lowered = tag.to_lowercase();
        match lowered.strip_prefix("jlpt-") {
            Some(level) => Some(level.to_uppercase()),
            None => Some(tag.to_string()),
        }
    }

    /// "p. 12 / Ch. 3 / 第三章" from whichever location fields are set.
    pub fn location(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(page) = self.page_number {
            parts.push(format!("p. {}", page));
        }
        if let Some(chapter) = self.chapter_number {
            parts.push(format!("Ch. {}", chapter));
        }
        if let Some(name) = &self.chapter_name {
            parts.push(name.clone());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }

    /// "漢:13 / 字:6" summary of recorded stroke counts.
    pub fn stroke_summary(&self) -> Option<String> {
        if self.strokes.is_empty() {
            return None;
        }
        let summary = self
            .strokes
            .iter()
            .map(|s| match s.strokes {
                Some(count) => format!("{}:{}", s.kanji, count),
                None => format!("{}:?", s.kanji),
            })
            .collect::<Vec<_>>()
            .join(" / ");
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jlpt_badge_strips_prefix() {
        let card = VocabCard { jlpt: Some("jlpt-n3".to_string()), ..Default::default() };
        assert_eq!(card.jlpt_badge().as_deref(), Some("N3"));
    }

    #[test]
    fn jlpt_badge_passes_through_non_jlpt_tags() {
        let card = VocabCard { jlpt: Some("Non-JLPT word".to_string()), ..Default::default() };
        assert_eq!(card.jlpt_badge().as_deref(), Some("Non-JLPT word"));
    }

    #[test]
    fn location_joins_page_and_chapter() {
        let card = VocabCard {
            page_number: Some(12),
            chapter_number: Some(3),
            chapter_name: Some("第三章".to_string()),
            ..Default::default()
        };
        assert_eq!(card.location().as_deref(), Some("p. 12 / Ch. 3 / 第三章"));
    }

    #[test]
    fn stroke_summary_marks_unknown_counts() {
        let card = VocabCard {
            strokes: vec![
                StrokeCount { kanji: "漢".to_string(), strokes: Some(13) },
                StrokeCount { kanji: "字".to_string(), strokes: None },
            ],
            ..Default::default()
        };
        assert_eq!(card.stroke_summary().as_deref(), Some("漢:13 / 字:?"));
    }

    #[test]
    fn reading_is_normalized_to_hiragana() {
        let mut card = VocabCard { reading: "ネコ".to_string(), ..Default::default() };
        card.normalize_reading();
        assert_eq!(card.reading, "ねこ");
    }
}
