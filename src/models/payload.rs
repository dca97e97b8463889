//! Payload shapes.
//!
//! The document itself stays an untyped `serde_json::Value`; renderers pull
//! out the top-level collection with [`collection`] and decode each entry
//! into one of the typed structs below. Decoding entry by entry means one
//! malformed entry costs only that entry.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::content_type::ContentType;
use crate::error::RenderError;

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    pub title: String,
    /// Any JSON value; see [`Keyword::english`].
    #[serde(default)]
    pub english: Option<Value>,
    pub content: String,
}

impl Keyword {
    /// The English translation to show, if any.
    ///
    /// `null`, `false`, `0` and `""` mean no translation. Strings are shown
    /// as-is, any other value in its JSON form.
    pub fn english(&self) -> Option<String> {
        match self.english.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(number) if number.as_f64() == Some(0.0) => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A lecture: a title and an ordered list of content items.
///
/// Items stay raw so each can be decoded (and skipped) independently.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lecture {
    pub title: String,
    pub content: Vec<Value>,
}

/// One block of lecture content, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LectureItem {
    Text {
        data: String,
    },
    Image {
        data: String,
        #[serde(default)]
        caption: Option<String>,
    },
    Code {
        data: String,
    },
    Quote {
        data: String,
        #[serde(default)]
        attribute: Option<String>,
    },
    /// Any tag this viewer does not know how to show.
    #[serde(other)]
    Unrecognized,
}

impl LectureItem {
    /// Decode one lecture item.
    ///
    /// An item whose `type` is missing or not a string is `Unrecognized`,
    /// the same as an unknown tag. A known tag with missing fields is an
    /// error.
    pub fn from_value(item: &Value) -> Result<Self, serde_json::Error> {
        match item.get("type") {
            Some(Value::String(_)) => decode_entry(item),
            _ => Ok(LectureItem::Unrecognized),
        }
    }
}

/// A question with its listed answers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub question: String,
    pub answers: Vec<Value>,
}

/// One answer of a [`Question`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    pub answer: String,
}

/// Borrow the top-level array for `content_type`.
///
/// A missing field or a non-array value is a data-format error, never an
/// empty collection.
pub fn collection(payload: &Value, content_type: ContentType) -> Result<&[Value], RenderError> {
    let field = content_type.collection_field();
    match payload.get(field) {
        Some(Value::Array(entries)) => Ok(entries),
        other => Err(RenderError::MalformedPayload {
            field: field.to_string(),
            found: describe(other).to_string(),
        }),
    }
}

/// Decode a single entry of a collection.
pub fn decode_entry<T: DeserializeOwned>(entry: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(entry)
}

fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_ok() {
        let payload = json!({"keywords": [{"title": "a", "content": "b"}]});
        let entries = collection(&payload, ContentType::Keywords).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_collection_object_is_malformed() {
        let payload = json!({"keywords": {"title": "a"}});
        let err = collection(&payload, ContentType::Keywords).unwrap_err();
        assert_eq!(
            err,
            RenderError::MalformedPayload {
                field: "keywords".to_string(),
                found: "an object".to_string()
            }
        );
    }

    #[test]
    fn test_collection_wrong_field_is_missing() {
        let payload = json!({"lectures": []});
        let err = collection(&payload, ContentType::Questions).unwrap_err();
        assert!(matches!(err, RenderError::MalformedPayload { found, .. } if found == "missing"));
    }

    #[test]
    fn test_collection_of_non_object_payload() {
        let payload = json!([1, 2, 3]);
        assert!(collection(&payload, ContentType::Lectures).is_err());
    }

    #[test]
    fn test_keyword_english_filter() {
        let with: Keyword =
            decode_entry(&json!({"title": "div", "english": "division", "content": "c"})).unwrap();
        assert_eq!(with.english(), Some("division".to_string()));

        let empty: Keyword =
            decode_entry(&json!({"title": "div", "english": "", "content": "c"})).unwrap();
        assert_eq!(empty.english(), None);

        let absent: Keyword = decode_entry(&json!({"title": "div", "content": "c"})).unwrap();
        assert_eq!(absent.english(), None);
    }

    #[test]
    fn test_keyword_english_falsy_values() {
        for english in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            let keyword: Keyword =
                decode_entry(&json!({"title": "a", "english": english, "content": "c"}))
                    .unwrap();
            assert_eq!(keyword.english(), None, "english = {}", english);
        }
    }

    #[test]
    fn test_keyword_english_truthy_scalars() {
        let number: Keyword =
            decode_entry(&json!({"title": "a", "english": 7, "content": "c"})).unwrap();
        assert_eq!(number.english(), Some("7".to_string()));

        let flag: Keyword =
            decode_entry(&json!({"title": "a", "english": true, "content": "c"})).unwrap();
        assert_eq!(flag.english(), Some("true".to_string()));
    }

    #[test]
    fn test_lecture_item_without_string_tag_is_unrecognized() {
        for item in [
            json!({"type": 3, "data": "x"}),
            json!({"type": null, "data": "x"}),
            json!({"data": "no tag"}),
            json!("bare string"),
        ] {
            assert_eq!(LectureItem::from_value(&item).unwrap(), LectureItem::Unrecognized);
        }
        assert!(LectureItem::from_value(&json!({"type": "text"})).is_err());
        assert_eq!(
            LectureItem::from_value(&json!({"type": "code", "data": "x"})).unwrap(),
            LectureItem::Code {
                data: "x".to_string()
            }
        );
    }

    #[test]
    fn test_lecture_item_tags() {
        let quote: LectureItem =
            decode_entry(&json!({"type": "quote", "data": "q", "attribute": "a"})).unwrap();
        assert_eq!(
            quote,
            LectureItem::Quote {
                data: "q".to_string(),
                attribute: Some("a".to_string())
            }
        );

        let image: LectureItem = decode_entry(&json!({"type": "image", "data": "x.png"})).unwrap();
        assert_eq!(
            image,
            LectureItem::Image {
                data: "x.png".to_string(),
                caption: None
            }
        );
    }

    #[test]
    fn test_lecture_item_unrecognized_tag() {
        let item: LectureItem =
            decode_entry(&json!({"type": "video", "data": "clip.mp4"})).unwrap();
        assert_eq!(item, LectureItem::Unrecognized);
    }

    #[test]
    fn test_lecture_item_missing_data_fails() {
        assert!(decode_entry::<LectureItem>(&json!({"type": "text"})).is_err());
        assert!(decode_entry::<LectureItem>(&json!({"data": "no tag"})).is_err());
    }

    #[test]
    fn test_question_requires_answers() {
        assert!(decode_entry::<Question>(&json!({"question": "Why?"})).is_err());
        let question: Question =
            decode_entry(&json!({"question": "Why?", "answers": [{"answer": "Because"}]})).unwrap();
        assert_eq!(question.answers.len(), 1);
    }
}
