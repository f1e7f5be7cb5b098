//! Two-step order creation: delivery details, then packages.

use chrono::NaiveDate;
use serde::Serialize;

use super::account::DEFAULT_COUNTRY_CODE;
use super::validation::{self, FormErrors};

/// Raw input of the order details step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsForm {
    /// Where the courier collects the packages.
    pub pickup_address: String,
    /// Collection date as `YYYY-MM-DD`.
    pub scheduled_date: String,
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Recipient email.
    pub email: String,
    /// Dialling prefix such as `+503`.
    pub country_code: String,
    /// Recipient local phone number.
    pub phone: String,
    /// Delivery address.
    pub delivery_address: String,
    /// Destination department.
    pub department: String,
    /// Destination municipality.
    pub municipality: String,
    /// Optional landmark near the delivery address.
    pub reference_point: String,
    /// Optional courier instructions.
    pub instructions: String,
}

impl Default for OrderDetailsForm {
    fn default() -> Self {
        Self {
            pickup_address: String::new(),
            scheduled_date: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone: String::new(),
            delivery_address: String::new(),
            department: String::new(),
            municipality: String::new(),
            reference_point: String::new(),
            instructions: String::new(),
        }
    }
}

/// Validated order details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
    /// Where the courier collects the packages.
    pub pickup_address: String,
    /// Collection date.
    pub scheduled_date: NaiveDate,
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Recipient email.
    pub email: String,
    /// Recipient phone with country code.
    pub phone: String,
    /// Delivery address.
    pub delivery_address: String,
    /// Destination department.
    pub department: String,
    /// Destination municipality.
    pub municipality: String,
    /// Landmark near the delivery address.
    pub reference_point: Option<String>,
    /// Courier instructions.
    pub instructions: Option<String>,
}

impl OrderDetailsForm {
    /// Validates the details step.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] naming every missing or malformed field.
    pub fn validate(&self) -> Result<OrderDetails, FormErrors> {
        let mut errors = FormErrors::new();
        let required_fields = [
            ("pickup_address", &self.pickup_address, "Pickup address is required"),
            ("first_name", &self.first_name, "First name is required"),
            ("last_name", &self.last_name, "Last name is required"),
            ("delivery_address", &self.delivery_address, "Delivery address is required"),
            ("department", &self.department, "Department is required"),
            ("municipality", &self.municipality, "Municipality is required"),
        ];
        for (field, value, message) in required_fields {
            errors.check(field, validation::required(value, message));
        }
        errors.check("email", validation::email(&self.email));
        errors.check("phone", validation::phone_number(&self.phone));

        match validation::date(&self.scheduled_date, "Scheduled date is required") {
            Ok(scheduled_date) if errors.is_empty() => Ok(OrderDetails {
                pickup_address: self.pickup_address.trim().to_owned(),
                scheduled_date,
                first_name: self.first_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                email: self.email.trim().to_owned(),
                phone: format!("{}{}", self.country_code.trim(), self.phone.trim()),
                delivery_address: self.delivery_address.trim().to_owned(),
                department: self.department.trim().to_owned(),
                municipality: self.municipality.trim().to_owned(),
                reference_point: optional(&self.reference_point),
                instructions: optional(&self.instructions),
            }),
            outcome => {
                errors.check("scheduled_date", outcome.map(drop));
                Err(errors)
            }
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Raw input for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Length, as entered.
    pub length: String,
    /// Width, as entered.
    pub width: String,
    /// Height, as entered.
    pub height: String,
    /// Weight, as entered.
    pub weight: String,
    /// Description of the contents.
    pub content: String,
}

/// A validated package line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Length, as entered.
    pub length: String,
    /// Width, as entered.
    pub width: String,
    /// Height, as entered.
    pub height: String,
    /// Weight, as entered.
    pub weight: String,
    /// Description of the contents.
    pub content: String,
}

impl ProductForm {
    /// Validates that every package field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] naming each blank field.
    pub fn validate(&self) -> Result<Product, FormErrors> {
        let mut errors = FormErrors::new();
        let fields = [
            ("length", &self.length, "Length is required"),
            ("width", &self.width, "Width is required"),
            ("height", &self.height, "Height is required"),
            ("weight", &self.weight, "Weight is required"),
            ("content", &self.content, "Content is required"),
        ];
        for (field, value, message) in fields {
            errors.check(field, validation::required(value, message));
        }
        errors.into_result()?;

        Ok(Product {
            length: self.length.trim().to_owned(),
            width: self.width.trim().to_owned(),
            height: self.height.trim().to_owned(),
            weight: self.weight.trim().to_owned(),
            content: self.content.trim().to_owned(),
        })
    }
}

/// Current step of the order wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    /// Entering pickup and recipient details.
    #[default]
    Details,
    /// Adding packages.
    Products,
}

/// A completed order ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    /// Validated details.
    pub details: OrderDetails,
    /// Packages, in the order they were added.
    pub products: Vec<Product>,
}

/// Errors raised by [`OrderWizard`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// The current step's form is invalid.
    #[error("form has errors: {0}")]
    Invalid(FormErrors),
    /// The transition is not available from the current step.
    #[error("not available on the {step:?} step")]
    WrongStep {
        /// Step the wizard was on.
        step: WizardStep,
    },
    /// The order has no packages yet.
    #[error("add at least one product before finishing the order")]
    NoProducts,
}

impl From<FormErrors> for WizardError {
    fn from(errors: FormErrors) -> Self {
        Self::Invalid(errors)
    }
}

/// Two-step order creation state.
#[derive(Debug, Clone, Default)]
pub struct OrderWizard {
    step: WizardStep,
    details_form: OrderDetailsForm,
    details: Option<OrderDetails>,
    products: Vec<Product>,
}

impl OrderWizard {
    /// Starts a wizard on the details step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Details form as last submitted.
    #[must_use]
    pub const fn details_form(&self) -> &OrderDetailsForm {
        &self.details_form
    }

    /// Packages added so far.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Validates the details and advances to the products step.
    ///
    /// The submitted form is kept even when invalid so it can be corrected.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::WrongStep`] outside the details step and
    /// [`WizardError::Invalid`] when the form fails validation.
    pub fn submit_details(&mut self, form: OrderDetailsForm) -> Result<(), WizardError> {
        self.require_step(WizardStep::Details)?;
        let outcome = form.validate();
        self.details_form = form;
        self.details = Some(outcome?);
        self.step = WizardStep::Products;
        Ok(())
    }

    /// Validates and appends one package.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::WrongStep`] outside the products step and
    /// [`WizardError::Invalid`] when the package fails validation.
    pub fn add_product(&mut self, form: &ProductForm) -> Result<(), WizardError> {
        self.require_step(WizardStep::Products)?;
        self.products.push(form.validate()?);
        Ok(())
    }

    /// Removes the package at `index`, returning it when present.
    pub fn remove_product(&mut self, index: usize) -> Option<Product> {
        (index < self.products.len()).then(|| self.products.remove(index))
    }

    /// Returns to the details step, keeping entered data.
    pub const fn back(&mut self) {
        self.step = WizardStep::Details;
    }

    /// Completes the order.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::WrongStep`] outside the products step and
    /// [`WizardError::NoProducts`] when no package was added.
    pub fn finish(self) -> Result<OrderDraft, WizardError> {
        self.require_step(WizardStep::Products)?;
        if self.products.is_empty() {
            return Err(WizardError::NoProducts);
        }
        let Some(details) = self.details else {
            return Err(WizardError::WrongStep { step: self.step });
        };
        Ok(OrderDraft {
            details,
            products: self.products,
        })
    }

    fn require_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep { step: self.step })
        }
    }
}
