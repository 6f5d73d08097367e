//! Review records and submission validation.

use std::fmt;

/// A product rating.
///
/// The review surface offers exactly three values; a closed enum keeps every
/// other integer unrepresentable, so neither the key-driven input nor the
/// programmatic API needs a runtime range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    One,
    Two,
    Three,
}

impl Rating {
    /// All ratings in ascending order (picker options).
    pub const ALL: [Rating; 3] = [Rating::One, Rating::Two, Rating::Three];

    /// The rating for a zero-based picker index.
    pub fn from_index(index: usize) -> Option<Rating> {
        Rating::ALL.get(index).copied()
    }

    /// The rating as its integer value (1 to 3).
    pub fn as_u8(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A completed, validated review submission.
///
/// Constructed only by [`ReviewDraft::validate`]; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Reviewer name (non-empty).
    pub name: String,
    /// Free-text review (non-empty).
    pub body: String,
    /// The rating.
    pub rating: Rating,
}

/// A validation failure for one review field.
///
/// All three are non-fatal and user-correctable; the display strings are the
/// messages shown in the form's error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name required")]
    MissingName,
    #[error("Review required")]
    MissingReview,
    #[error("Rating required")]
    MissingRating,
}

/// The form's in-progress field values.
///
/// All three fields are optional while editing -- empty text counts as
/// absent. The draft survives tab switches; it is only cleared by a
/// successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub body: String,
    pub rating: Option<Rating>,
}

impl ReviewDraft {
    /// Check all three fields for presence.
    ///
    /// On success, returns the finished [`Review`] carrying the exact field
    /// values. On failure, returns one error per missing field in the fixed
    /// order name, review, rating -- rebuilt fresh on every call, never
    /// accumulated across attempts.
    pub fn validate(&self) -> Result<Review, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::MissingName);
        }
        if self.body.is_empty() {
            errors.push(ValidationError::MissingReview);
        }
        if self.rating.is_none() {
            errors.push(ValidationError::MissingRating);
        }

        match self.rating {
            Some(rating) if errors.is_empty() => Ok(Review {
                name: self.name.clone(),
                body: self.body.clone(),
                rating,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_present_builds_the_review() {
        let draft = ReviewDraft {
            name: "Ana".into(),
            body: "Great socks".into(),
            rating: Some(Rating::Three),
        };
        let review = draft.validate().unwrap();
        assert_eq!(review.name, "Ana");
        assert_eq!(review.body, "Great socks");
        assert_eq!(review.rating, Rating::Three);
    }

    #[test]
    fn empty_draft_yields_all_errors_in_order() {
        let errors = ReviewDraft::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingName,
                ValidationError::MissingReview,
                ValidationError::MissingRating,
            ]
        );
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec!["Name required", "Review required", "Rating required"]
        );
    }

    #[test]
    fn single_missing_field_yields_single_error() {
        let draft = ReviewDraft {
            name: "Ana".into(),
            body: "Great socks".into(),
            rating: None,
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![ValidationError::MissingRating]
        );
    }

    #[test]
    fn validation_is_fresh_on_every_call() {
        let draft = ReviewDraft {
            name: String::new(),
            body: "text".into(),
            rating: Some(Rating::One),
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![ValidationError::MissingName]
        );
        // A second attempt reports the same single error, not an accumulation.
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![ValidationError::MissingName]
        );
    }

    #[test]
    fn rating_maps_to_integers() {
        assert_eq!(Rating::One.as_u8(), 1);
        assert_eq!(Rating::Three.to_string(), "3");
        assert_eq!(Rating::from_index(1), Some(Rating::Two));
        assert_eq!(Rating::from_index(3), None);
    }
}
