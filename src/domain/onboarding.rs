//! Artist application form: validation rules and the simulated submission.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

pub const BIO_MIN_CHARS: usize = 50;
pub const BIO_MAX_CHARS: usize = 500;
pub const PHONE_MIN_CHARS: usize = 10;

/// Experience dropdown options: stored value plus display label.
pub const EXPERIENCE_BRACKETS: [(&str, &str); 4] = [
    ("0-1", "0-1 years (Beginner)"),
    ("2-5", "2-5 years (Intermediate)"),
    ("5-10", "5-10 years (Experienced)"),
    ("10+", "10+ years (Expert)"),
];

/// Raw form state as typed by the applicant. Everything is a string or a
/// multi-select list; `validate` turns it into an [`ArtistApplication`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub experience: String,
    pub price_range: String,
    pub portfolio: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    PhoneTooShort,
    #[error("Please enter your location")]
    LocationTooShort,
    #[error("Bio must be between {BIO_MIN_CHARS} and {BIO_MAX_CHARS} characters")]
    BioLength,
    #[error("Please select at least one category")]
    NoCategories,
    #[error("Please select at least one language")]
    NoLanguages,
    #[error("Please select your experience level")]
    NoExperience,
    #[error("Please select a price range")]
    NoPriceRange,
    #[error("Please enter a valid portfolio URL")]
    InvalidPortfolioUrl,
}

impl FieldError {
    /// Which form field the error belongs to, for inline display.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameTooShort => "name",
            FieldError::InvalidEmail => "email",
            FieldError::PhoneTooShort => "phone",
            FieldError::LocationTooShort => "location",
            FieldError::BioLength => "bio",
            FieldError::NoCategories => "categories",
            FieldError::NoLanguages => "languages",
            FieldError::NoExperience => "experience",
            FieldError::NoPriceRange => "price_range",
            FieldError::InvalidPortfolioUrl => "portfolio",
        }
    }
}

/// Checks every rule and reports all failures at once; an empty vec means
/// the form is ready to submit.
pub fn validate(form: &ApplicationForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().chars().count() < 2 {
        errors.push(FieldError::NameTooShort);
    }
    if !is_plausible_email(form.email.trim()) {
        errors.push(FieldError::InvalidEmail);
    }
    if form.phone.trim().chars().count() < PHONE_MIN_CHARS {
        errors.push(FieldError::PhoneTooShort);
    }
    if form.location.trim().chars().count() < 2 {
        errors.push(FieldError::LocationTooShort);
    }
    let bio_len = form.bio.trim().chars().count();
    if !(BIO_MIN_CHARS..=BIO_MAX_CHARS).contains(&bio_len) {
        errors.push(FieldError::BioLength);
    }
    if form.categories.is_empty() {
        errors.push(FieldError::NoCategories);
    }
    if form.languages.is_empty() {
        errors.push(FieldError::NoLanguages);
    }
    if form.experience.is_empty() {
        errors.push(FieldError::NoExperience);
    }
    if form.price_range.is_empty() {
        errors.push(FieldError::NoPriceRange);
    }
    let portfolio = form.portfolio.trim();
    if !portfolio.is_empty() && Url::parse(portfolio).is_err() {
        errors.push(FieldError::InvalidPortfolioUrl);
    }

    errors
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// A validated application, ready to hand to a (future) backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtistApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub experience: String,
    pub price_range: String,
    pub portfolio: Option<String>,
}

impl ArtistApplication {
    /// Builds the application from a form that already passed [`validate`].
    pub fn from_form(form: &ApplicationForm) -> Self {
        let portfolio = form.portfolio.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            location: form.location.trim().to_string(),
            bio: form.bio.trim().to_string(),
            categories: form.categories.clone(),
            languages: form.languages.clone(),
            experience: form.experience.clone(),
            price_range: form.price_range.clone(),
            portfolio: (!portfolio.is_empty()).then(|| portfolio.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionReceipt {
    pub reference: String,
}

/// Simulated network round trip: log the payload, wait the fixed delay,
/// return a reference. There is no failure path and no cancellation; the
/// caller either sees the receipt or the process went away first.
pub async fn submit_application(
    application: ArtistApplication,
    delay: Duration,
) -> SubmissionReceipt {
    let reference = Uuid::new_v4().to_string();
    match serde_json::to_string(&application) {
        Ok(payload) => {
            tracing::info!(%reference, %payload, "submitting artist application");
        }
        Err(err) => {
            tracing::warn!(%reference, %err, "failed to serialize application payload");
        }
    }
    tokio::time::sleep(delay).await;
    tracing::info!(%reference, "artist application accepted");
    SubmissionReceipt { reference }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ApplicationForm {
        ApplicationForm {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            bio: "Playback singer with a decade of stage experience across weddings, \
                  corporate galas, and televised festival shows."
                .to_string(),
            categories: vec!["Singers".to_string()],
            languages: vec!["Hindi".to_string(), "English".to_string()],
            experience: "5-10".to_string(),
            price_range: "₹25,000 - ₹50,000".to_string(),
            portfolio: String::new(),
        }
    }

    #[test]
    fn complete_form_passes_validation() {
        assert!(validate(&complete_form()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&ApplicationForm::default());
        for expected in [
            FieldError::NameTooShort,
            FieldError::InvalidEmail,
            FieldError::PhoneTooShort,
            FieldError::LocationTooShort,
            FieldError::BioLength,
            FieldError::NoCategories,
            FieldError::NoLanguages,
            FieldError::NoExperience,
            FieldError::NoPriceRange,
        ] {
            assert!(errors.contains(&expected), "missing {expected:?}");
        }
        // Empty portfolio is fine; the field is optional.
        assert!(!errors.contains(&FieldError::InvalidPortfolioUrl));
    }

    #[test]
    fn bio_bounds_are_inclusive() {
        let mut form = complete_form();
        form.bio = "x".repeat(BIO_MIN_CHARS);
        assert!(validate(&form).is_empty());
        form.bio = "x".repeat(BIO_MAX_CHARS + 1);
        assert!(validate(&form).contains(&FieldError::BioLength));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = complete_form();
        for bad in ["plainaddress", "missing@tld", "@example.com", "a@."] {
            form.email = bad.to_string();
            assert!(
                validate(&form).contains(&FieldError::InvalidEmail),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn portfolio_must_parse_as_url_when_present() {
        let mut form = complete_form();
        form.portfolio = "not a url".to_string();
        assert!(validate(&form).contains(&FieldError::InvalidPortfolioUrl));
        form.portfolio = "https://example.com/reel".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn application_trims_fields_and_drops_empty_portfolio() {
        let mut form = complete_form();
        form.name = "  Asha Verma  ".to_string();
        form.portfolio = "  ".to_string();
        let application = ArtistApplication::from_form(&form);
        assert_eq!(application.name, "Asha Verma");
        assert_eq!(application.portfolio, None);
    }

    #[tokio::test]
    async fn submission_resolves_after_delay_with_reference() {
        let application = ArtistApplication::from_form(&complete_form());
        let receipt = submit_application(application, Duration::from_millis(5)).await;
        assert!(!receipt.reference.is_empty());
    }
}
