//! Step machinery and validators for the onboarding wizards.
//!
//! Each wizard is a linear sequence of steps. `Next` advances only when the
//! current step's validator passes, `Back` always succeeds, and the final
//! `Next` submits. Validation rules live here as pure functions so the views
//! stay thin and the rules stay testable.

use api::DoulaMatchPreferences;

/// Linear step state shared by all four wizards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    step: usize,
    total: usize,
}

impl Wizard {
    pub fn new(total: usize) -> Self {
        Self { step: 1, total }
    }

    /// 1-based current step.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_last(&self) -> bool {
        self.step == self.total
    }

    /// Move forward one step; the caller validates first.
    pub fn advance(&mut self) {
        if self.step < self.total {
            self.step += 1;
        }
    }

    /// Move back one step; never validates, never fails.
    pub fn back(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }
}

/// Step-1 form fields of the expecting-mother wizard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotherBasics {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub due_date: String,
    pub location: String,
}

/// Expecting-mother step 1: every field present, password at least six
/// characters, email contains `@`.
pub fn validate_mother_basics(basics: &MotherBasics) -> Result<(), String> {
    if basics.full_name.is_empty()
        || basics.email.is_empty()
        || basics.password.is_empty()
        || basics.due_date.is_empty()
        || basics.location.is_empty()
    {
        return Err("Please fill in all fields".to_string());
    }
    if basics.password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if !basics.email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Expecting-mother step 2: at least one birth-plan selection.
pub fn validate_birth_plan(selected: &[String]) -> Result<(), String> {
    if selected.is_empty() {
        return Err("Please select at least one birth plan preference".to_string());
    }
    Ok(())
}

/// Expecting-mother step 3: at least one selection in each category.
pub fn validate_match_preferences(prefs: &DoulaMatchPreferences) -> Result<(), String> {
    if !prefs.is_complete() {
        return Err("Please select at least one option for each category".to_string());
    }
    Ok(())
}

/// Account fields shared by the doula, birthing-center, and organization
/// wizards (their first step collects sign-in credentials).
pub fn validate_account_basics(
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<(), String> {
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Birth-plan options offered in expecting-mother step 2.
pub const BIRTH_PLAN_OPTIONS: &[&str] = &[
    "Natural Birth",
    "Hospital Birth",
    "Home Birth",
    "Water Birth",
    "Hypnobirthing",
    "VBAC",
];

/// Doula-matching option lists for expecting-mother step 3.
pub const MATCH_EXPERIENCE_OPTIONS: &[&str] =
    &["First Time Mothers", "VBAC", "Twins", "High Risk"];
pub const MATCH_SPECIALTY_OPTIONS: &[&str] =
    &["Prenatal Support", "Labor Support", "Postpartum Care", "Lactation"];
pub const MATCH_CULTURAL_OPTIONS: &[&str] = &[
    "Black American",
    "West Indian",
    "African",
    "Asian",
    "Hispanic",
    "Middle Eastern",
    "European",
];

/// Option lists for the doula wizard.
pub const DOULA_CERTIFICATION_OPTIONS: &[&str] = &[
    "DONA International",
    "CAPPA",
    "ICEA",
    "ProDoula",
    "Birth Arts International",
];
pub const DOULA_SPECIALTY_OPTIONS: &[&str] = &[
    "Birth Doula",
    "Postpartum Doula",
    "Prenatal Support",
    "Lactation Support",
    "VBAC Support",
    "High Risk Pregnancy",
    "Twin Birth",
    "Water Birth",
    "Hypnobirthing",
];
pub const DOULA_LANGUAGE_OPTIONS: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "Arabic",
    "Mandarin",
    "Hindi",
    "Swahili",
];
pub const DOULA_CULTURAL_OPTIONS: &[&str] = &[
    "African",
    "Asian",
    "Hispanic",
    "Middle Eastern",
    "European",
    "Indigenous",
];
pub const DOULA_SERVICE_OPTIONS: &[&str] = &[
    "Birth Planning",
    "Labor Support",
    "Postpartum Care",
    "Lactation Support",
    "Childbirth Education",
    "Prenatal Yoga",
    "Massage Therapy",
    "Nutritional Guidance",
];

/// Option lists for the birthing-center wizard.
pub const CENTER_FACILITY_OPTIONS: &[&str] = &[
    "Birth Pools",
    "Private Rooms",
    "Family Accommodation",
    "Kitchen Facilities",
    "Garden/Outdoor Space",
    "Lactation Room",
    "Operating Room",
    "Recovery Suites",
];
pub const CENTER_SERVICE_OPTIONS: &[&str] = &[
    "Natural Birth",
    "Water Birth",
    "VBAC",
    "Prenatal Care",
    "Postpartum Care",
    "Lactation Support",
    "Childbirth Education",
    "Prenatal Yoga",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_basics() -> MotherBasics {
        MotherBasics {
            full_name: "Layla Hassan".to_string(),
            email: "layla@example.com".to_string(),
            password: "secret-password".to_string(),
            due_date: "2025-09-01".to_string(),
            location: "Atlanta, GA".to_string(),
        }
    }

    #[test]
    fn step_one_rejects_missing_fields() {
        assert!(validate_mother_basics(&valid_basics()).is_ok());

        for blank in ["full_name", "email", "password", "due_date", "location"] {
            let mut basics = valid_basics();
            match blank {
                "full_name" => basics.full_name.clear(),
                "email" => basics.email.clear(),
                "password" => basics.password.clear(),
                "due_date" => basics.due_date.clear(),
                _ => basics.location.clear(),
            }
            assert_eq!(
                validate_mother_basics(&basics).unwrap_err(),
                "Please fill in all fields",
                "field {blank}"
            );
        }
    }

    #[test]
    fn step_one_rejects_short_password_and_bad_email() {
        let mut basics = valid_basics();
        basics.password = "12345".to_string();
        assert_eq!(
            validate_mother_basics(&basics).unwrap_err(),
            "Password must be at least 6 characters"
        );

        let mut basics = valid_basics();
        basics.email = "layla.example.com".to_string();
        assert_eq!(
            validate_mother_basics(&basics).unwrap_err(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn later_steps_require_selections() {
        assert!(validate_birth_plan(&[]).is_err());
        assert!(validate_birth_plan(&["Water Birth".to_string()]).is_ok());

        let mut prefs = DoulaMatchPreferences::default();
        assert!(validate_match_preferences(&prefs).is_err());
        prefs.experience.push("First Time Mothers".to_string());
        prefs.specialties.push("Labor Support".to_string());
        assert!(validate_match_preferences(&prefs).is_err());
        prefs.cultural_background.push("West Indian".to_string());
        assert!(validate_match_preferences(&prefs).is_ok());
    }

    #[test]
    fn wizard_steps_clamp_at_both_ends() {
        let mut wizard = Wizard::new(3);
        assert_eq!(wizard.step(), 1);
        wizard.back();
        assert_eq!(wizard.step(), 1);

        wizard.advance();
        wizard.advance();
        assert!(wizard.is_last());
        wizard.advance();
        assert_eq!(wizard.step(), 3);

        wizard.back();
        assert_eq!(wizard.step(), 2);
    }
}
