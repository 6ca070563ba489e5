//! # Property Form Validation
//!
//! The create/edit form is validated entirely locally before any mutation is
//! attempted (fail closed). Errors are reported per field so a caller can
//! surface them next to the offending input.
//!
//! Numeric inputs are signed on purpose: the form must be able to represent
//! "occupied: -3" long enough to reject it with a useful message.

use crate::model::{ContactId, PropertyStatus, PropertyTag};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    City,
    TotalUnits,
    OccupiedUnits,
    MonthlyRevenue,
    Manager,
    Owner,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::TotalUnits => "total units",
            FormField::OccupiedUnits => "occupied units",
            FormField::MonthlyRevenue => "monthly revenue",
            FormField::Manager => "manager",
            FormField::Owner => "owner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// The complete set of per-field errors from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// The create/edit submission payload, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: String,
    pub thumbnail: String,
    pub total_units: i64,
    pub occupied_units: i64,
    pub monthly_revenue: i64,
    pub average_rent: i64,
    pub status: PropertyStatus,
    pub manager_id: Option<ContactId>,
    pub owner_id: Option<ContactId>,
    pub tags: Vec<PropertyTag>,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            city: String::new(),
            description: String::new(),
            thumbnail: String::new(),
            total_units: 1,
            occupied_units: 0,
            monthly_revenue: 0,
            average_rent: 0,
            status: PropertyStatus::Active,
            manager_id: None,
            owner_id: None,
            tags: Vec::new(),
        }
    }
}

/// Unit counts are stored as `u32`; anything above this cannot be
/// represented and is rejected instead of truncated.
const MAX_UNITS: i64 = u32::MAX as i64;

impl PropertyForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(FormField::Name, "Property name is required"));
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError::new(FormField::Address, "Address is required"));
        }
        if self.city.trim().is_empty() {
            errors.push(FieldError::new(FormField::City, "City is required"));
        }
        if self.total_units <= 0 {
            errors.push(FieldError::new(
                FormField::TotalUnits,
                "Total units must be greater than zero",
            ));
        } else if self.total_units > MAX_UNITS {
            errors.push(FieldError::new(
                FormField::TotalUnits,
                "Total units is too large",
            ));
        }
        if self.occupied_units < 0 {
            errors.push(FieldError::new(
                FormField::OccupiedUnits,
                "Occupied units cannot be negative",
            ));
        } else if self.total_units > 0 && self.occupied_units > self.total_units {
            errors.push(FieldError::new(
                FormField::OccupiedUnits,
                "Occupied units cannot exceed total units",
            ));
        }
        if self.monthly_revenue < 0 {
            errors.push(FieldError::new(
                FormField::MonthlyRevenue,
                "Monthly revenue must be a positive number",
            ));
        }
        if self.manager_id.is_none() {
            errors.push(FieldError::new(
                FormField::Manager,
                "Please select a property manager",
            ));
        }
        if self.owner_id.is_none() {
            errors.push(FieldError::new(
                FormField::Owner,
                "Please select a property owner",
            ));
        }

        FormErrors(errors)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PropertyForm {
        PropertyForm {
            name: "Sunset Apartments".into(),
            address: "123 Main Street".into(),
            city: "New York".into(),
            total_units: 24,
            occupied_units: 22,
            monthly_revenue: 28_800,
            manager_id: Some(1),
            owner_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid_form().is_valid());
    }

    #[test]
    fn default_form_is_missing_required_fields() {
        let errors = PropertyForm::default().validate();
        assert!(errors.field(FormField::Name).is_some());
        assert!(errors.field(FormField::Address).is_some());
        assert!(errors.field(FormField::City).is_some());
        assert!(errors.field(FormField::Manager).is_some());
        assert!(errors.field(FormField::Owner).is_some());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut form = valid_form();
        form.name = "   ".into();
        assert!(form.validate().field(FormField::Name).is_some());
    }

    #[test]
    fn total_units_must_be_positive() {
        let mut form = valid_form();
        form.total_units = 0;
        form.occupied_units = 0;
        let errors = form.validate();
        assert!(errors.field(FormField::TotalUnits).is_some());

        form.total_units = -3;
        assert!(form.validate().field(FormField::TotalUnits).is_some());
    }

    #[test]
    fn total_units_beyond_u32_are_rejected() {
        let mut form = valid_form();
        form.total_units = i64::from(u32::MAX) + 2;
        form.occupied_units = 1;
        let errors = form.validate();
        let err = errors.field(FormField::TotalUnits).unwrap();
        assert!(err.message.contains("too large"));

        form.total_units = i64::from(u32::MAX);
        form.occupied_units = 1;
        assert!(form.validate().field(FormField::TotalUnits).is_none());
    }

    #[test]
    fn occupied_cannot_exceed_total() {
        let mut form = valid_form();
        form.occupied_units = 25;
        let errors = form.validate();
        let err = errors.field(FormField::OccupiedUnits).unwrap();
        assert!(err.message.contains("exceed"));
    }

    #[test]
    fn occupied_cannot_be_negative() {
        let mut form = valid_form();
        form.occupied_units = -1;
        assert!(form.validate().field(FormField::OccupiedUnits).is_some());
    }

    #[test]
    fn revenue_cannot_be_negative() {
        let mut form = valid_form();
        form.monthly_revenue = -100;
        assert!(form.validate().field(FormField::MonthlyRevenue).is_some());
    }

    #[test]
    fn errors_render_as_one_line() {
        let mut form = valid_form();
        form.name.clear();
        form.monthly_revenue = -1;
        let rendered = form.validate().to_string();
        assert!(rendered.contains("name: Property name is required"));
        assert!(rendered.contains("; "));
    }
}
