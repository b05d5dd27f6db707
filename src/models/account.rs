use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::VariantNames;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::account::{AccountType, Model as AccountModel};
use crate::handlers::common::Pagination;

/// Request body shared by create and update.
///
/// Fields default to empty strings so that a missing field fails the same
/// check as an empty one instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AccountInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Cash")]
    pub name: String,

    #[serde(default, rename = "type")]
    #[validate(custom = "validate_account_type")]
    #[schema(example = "ASSET")]
    pub account_type: String,
}

/// Account fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub account_type: AccountType,
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every violated constraint of one request, ordered by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: wire_name(field).to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", wire_name(field))),
                })
            })
            .collect();
        collected.sort_by(|a, b| a.field.cmp(&b.field));
        FieldErrors(collected)
    }
}

impl From<FieldErrors> for crate::errors::ServiceError {
    fn from(errors: FieldErrors) -> Self {
        crate::errors::ServiceError::ValidationError(errors.to_string())
    }
}

// validator reports struct field names; clients know the JSON keys.
fn wire_name(field: &str) -> &str {
    match field {
        "account_type" => "type",
        other => other,
    }
}

fn validate_account_type(value: &str) -> Result<(), ValidationError> {
    if AccountType::from_str(value).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("account_type");
    err.message = Some(account_type_message().into());
    Err(err)
}

fn account_type_message() -> String {
    format!("Type must be one of: {}", AccountType::VARIANTS.join(", "))
}

impl AccountInput {
    /// Validates the request and yields the typed account fields.
    pub fn into_draft(self) -> Result<AccountDraft, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;
        let account_type = AccountType::from_str(&self.account_type).map_err(|_| {
            FieldErrors(vec![FieldError {
                field: "type".to_string(),
                message: account_type_message(),
            }])
        })?;
        Ok(AccountDraft {
            name: self.name,
            account_type,
        })
    }
}

/// Account as exposed over HTTP
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountModel> for AccountResponse {
    fn from(model: AccountModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            account_type: model.account_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// One page of accounts plus its pagination summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountListResponse {
    pub data: Vec<AccountResponse>,
    pub pagination: Pagination,
}
