//! Client-side validation for the account and order forms.
//!
//! Every form exposes a `validate` method returning either the typed value
//! the API expects or [`FormErrors`] with one message per failing field.

mod account;
mod order;
pub mod validation;

pub use account::{DEFAULT_COUNTRY_CODE, LoginForm, RegistrationForm};
pub use order::{
    OrderDetails, OrderDetailsForm, OrderDraft, OrderWizard, Product, ProductForm, WizardError,
    WizardStep,
};
pub use validation::FormErrors;
