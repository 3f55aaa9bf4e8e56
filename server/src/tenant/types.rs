use crate::theme::{PartialBrand, PartialColors, PartialThemeConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub i64);

impl TenantId {
    /// Parses a `tenantId` parameter. Only positive integers are ids.
    pub fn parse(value: &str) -> Option<TenantId> {
        match value.trim().parse::<i64>() {
            Ok(id) if id > 0 => Some(TenantId(id)),
            _ => None,
        }
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    #[default]
    Active,
    #[serde(other)]
    Inactive,
}

/// A registered white-label identity, as stored by the tenant directory.
///
/// The resolution engine only reads tenants; creating and editing them is
/// an administrator action owned by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub status: TenantStatus,
}

impl Tenant {
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active
    }

    /// The branding layer this tenant contributes on top of the defaults.
    ///
    /// Values are passed through as-is; invalid colors or logos are dropped
    /// by the merge, never rendered.
    pub fn theme_patch(&self) -> PartialThemeConfig {
        PartialThemeConfig {
            colors: Some(PartialColors {
                primary: self.primary_color.as_deref().map(Into::into),
                secondary: self.secondary_color.as_deref().map(Into::into),
                ..Default::default()
            }),
            brand: Some(PartialBrand {
                name: Some(self.name.as_str().into()),
                tagline: self.tagline.as_deref().map(Into::into),
                logo: self.logo.as_deref().map(Into::into),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tenant_id() {
        assert_eq!(TenantId::parse("42"), Some(TenantId(42)));
        assert_eq!(TenantId::parse(" 7 "), Some(TenantId(7)));
        assert_eq!(TenantId::parse("0"), None);
        assert_eq!(TenantId::parse("-3"), None);
        assert_eq!(TenantId::parse("abc"), None);
    }

    #[test]
    fn test_tenant_json_shape() {
        let tenant: Tenant = serde_json::from_str(
            r##"{"id":3,"slug":"bingo","name":"BingGo","primaryColor":"#2563eb","status":"suspended"}"##,
        )
        .unwrap();

        assert_eq!(tenant.id, TenantId(3));
        assert_eq!(tenant.primary_color.as_deref(), Some("#2563eb"));
        assert_eq!(tenant.status, TenantStatus::Inactive);
        assert!(!tenant.is_active());
    }
}
