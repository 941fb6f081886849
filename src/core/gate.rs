use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::{DocumentTypeCategory, classify, normalize_identifier};
use super::error::ComprobanteError;
use super::invoice::{FieldRequirement, InvoiceMode};
use super::options::{DocumentOption, find_option};
use super::validation::{FormSnapshot, ValidationResult, validate_form_in_mode};

/// Default auto-dismiss delay for the detection confirmation.
pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_secs(5);

const DEFAULT_REQUIRED_FIELDS: [&str; 5] = ["name", "email", "phone", "street", "city"];

/// Form field of the country select, mandatory only with `require_country`.
pub const COUNTRY_FIELD: &str = "country_id";

/// Gate configuration.
///
/// Deserializes from JSON with every key optional:
///
/// ```
/// use comprobante::core::GateConfig;
///
/// let config: GateConfig = serde_json::from_str(r#"{"notification_delay_ms": 3000}"#).unwrap();
/// assert_eq!(config.notification_delay().as_millis(), 3000);
/// assert_eq!(config.national_id_labels, vec!["DNI".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Substrings identifying the DNI option label.
    pub national_id_labels: Vec<String>,
    /// Substrings identifying the RUC option label.
    pub tax_id_labels: Vec<String>,
    /// Always-mandatory form fields.
    pub required_fields: Vec<String>,
    /// Also require [`COUNTRY_FIELD`].
    pub require_country: bool,
    /// Auto-dismiss delay of the detection confirmation, in milliseconds.
    pub notification_delay_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            national_id_labels: vec!["DNI".into()],
            tax_id_labels: vec!["RUC".into()],
            required_fields: DEFAULT_REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
            require_country: false,
            notification_delay_ms: DEFAULT_NOTIFICATION_DELAY.as_millis() as u64,
        }
    }
}

impl GateConfig {
    pub fn with_notification_delay(mut self, delay: Duration) -> Self {
        self.notification_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_country_required(mut self, require: bool) -> Self {
        self.require_country = require;
        self
    }

    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_delay_ms)
    }

    /// Search labels for a recognized category.
    pub fn labels_for(&self, category: DocumentTypeCategory) -> &[String] {
        match category {
            DocumentTypeCategory::NationalId => self.national_id_labels.as_slice(),
            DocumentTypeCategory::TaxId => self.tax_id_labels.as_slice(),
            DocumentTypeCategory::Unknown | DocumentTypeCategory::Incomplete => &[],
        }
    }

    /// Effective required-field list, including the country when enabled.
    pub fn effective_required_fields(&self) -> Vec<String> {
        let mut fields = self.required_fields.clone();
        if self.require_country && !fields.iter().any(|f| f == COUNTRY_FIELD) {
            fields.push(COUNTRY_FIELD.to_string());
        }
        fields
    }

    /// Reject configurations under which detection could never select anything.
    pub fn check(&self) -> Result<(), ComprobanteError> {
        for (name, labels) in [
            ("national_id_labels", &self.national_id_labels),
            ("tax_id_labels", &self.tax_id_labels),
        ] {
            if labels.iter().all(|l| l.trim().is_empty()) {
                return Err(ComprobanteError::Config(format!(
                    "{name} must contain at least one non-empty label"
                )));
            }
        }
        Ok(())
    }
}

/// Transient confirmation shown after an automatic selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub category: DocumentTypeCategory,
    pub issued_at: DateTime<Utc>,
    #[serde(skip)]
    pub dismiss_after: Duration,
}

impl Notification {
    /// Instant at which the page removes the notification.
    pub fn dismiss_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.dismiss_after)
            .ok()
            .and_then(|delay| self.issued_at.checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.dismiss_at()
    }
}

/// Result of one identifier input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierOutcome {
    /// Digits-only value to write back into the identifier input.
    pub normalized: String,
    pub category: DocumentTypeCategory,
    /// Document-type selection after the event.
    pub next_selection: Option<String>,
    /// Present only when the selection changed.
    pub notification: Option<Notification>,
}

impl IdentifierOutcome {
    /// Whether the page must fire a change event and show the confirmation.
    pub fn notify(&self) -> bool {
        self.notification.is_some()
    }
}

/// Checkout form gate: document-type detection, Boleta/Factura state and
/// form validation over plain snapshots.
///
/// ```
/// use comprobante::core::*;
///
/// let mut gate = FormGate::new(GateConfig::default(), false);
/// let options = [DocumentOption::new("1", "DNI"), DocumentOption::new("6", "RUC")];
///
/// let outcome = gate.on_identifier_changed("12345678", &options, None);
/// assert_eq!(outcome.next_selection.as_deref(), Some("1"));
/// assert!(outcome.notify());
///
/// let req = gate.on_invoice_toggle(true);
/// assert!(req.required);
/// assert_eq!(gate.mode(), InvoiceMode::Factura);
/// ```
#[derive(Debug, Clone)]
pub struct FormGate {
    config: GateConfig,
    mode: InvoiceMode,
}

impl FormGate {
    /// Create a gate whose invoice state follows the toggle's initial checked state.
    pub fn new(config: GateConfig, initially_wants_invoice: bool) -> Self {
        Self {
            config,
            mode: InvoiceMode::from_wants_invoice(initially_wants_invoice),
        }
    }

    /// Like [`Self::new`], rejecting configurations that fail [`GateConfig::check`].
    pub fn try_new(config: GateConfig, initially_wants_invoice: bool) -> Result<Self, ComprobanteError> {
        config.check()?;
        Ok(Self::new(config, initially_wants_invoice))
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn mode(&self) -> InvoiceMode {
        self.mode
    }

    /// Handle an input, keyup, or paste on the identifier field.
    ///
    /// Paste is validated inline like any other event.
    pub fn on_identifier_changed(
        &self,
        raw: &str,
        options: &[DocumentOption],
        current_selection: Option<&str>,
    ) -> IdentifierOutcome {
        self.on_identifier_changed_at(raw, options, current_selection, Utc::now())
    }

    /// Same as [`Self::on_identifier_changed`] with an explicit clock.
    pub fn on_identifier_changed_at(
        &self,
        raw: &str,
        options: &[DocumentOption],
        current_selection: Option<&str>,
        now: DateTime<Utc>,
    ) -> IdentifierOutcome {
        let normalized = normalize_identifier(raw);
        let category = classify(&normalized);
        let unchanged = || IdentifierOutcome {
            normalized: normalized.clone(),
            category,
            next_selection: current_selection.map(str::to_string),
            notification: None,
        };

        let Some(label) = category.label() else {
            if category == DocumentTypeCategory::Incomplete {
                tracing::debug!(digits = normalized.len(), "identifier not recognized");
            }
            return unchanged();
        };

        let Some(option) = find_option(options, self.config.labels_for(category)) else {
            tracing::debug!(document = label, "no matching document type option");
            return unchanged();
        };

        if current_selection == Some(option.value.as_str()) {
            return unchanged();
        }

        tracing::debug!(document = label, option = %option.value, "document type selected");
        IdentifierOutcome {
            normalized: normalized.clone(),
            category,
            next_selection: Some(option.value.clone()),
            notification: Some(Notification {
                message: format!("{label} detected, document type selected automatically"),
                category,
                issued_at: now,
                dismiss_after: self.config.notification_delay(),
            }),
        }
    }

    /// Handle a change of the invoice toggle.
    pub fn on_invoice_toggle(&mut self, wants_invoice: bool) -> FieldRequirement {
        let (mode, requirement) = self.mode.toggle(wants_invoice);
        self.mode = mode;
        requirement
    }

    /// Validate a snapshot against the configured required fields.
    ///
    /// Factura rules apply when either the gate or the snapshot is in
    /// Factura mode, so a stale snapshot flag cannot skip them.
    pub fn validate(&self, snapshot: &FormSnapshot) -> ValidationResult {
        let mode = if self.mode.wants_invoice() || snapshot.wants_invoice {
            InvoiceMode::Factura
        } else {
            InvoiceMode::Boleta
        };
        if mode != snapshot.mode() {
            tracing::debug!(gate = %self.mode, "snapshot invoice flag disagrees with gate");
        }
        let result = validate_form_in_mode(snapshot, mode, &self.config.effective_required_fields());
        if !result.is_valid() {
            tracing::debug!(fields = ?result.invalid_fields(), "checkout form invalid");
        }
        result
    }
}

impl Default for FormGate {
    fn default() -> Self {
        Self::new(GateConfig::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn options() -> Vec<DocumentOption> {
        vec![
            DocumentOption::new("", "Seleccione"),
            DocumentOption::new("1", "DNI"),
            DocumentOption::new("6", "RUC"),
        ]
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn dni_selects_option_and_notifies() {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed_at("12345678", &options(), None, t0());
        assert_eq!(out.category, DocumentTypeCategory::NationalId);
        assert_eq!(out.next_selection.as_deref(), Some("1"));
        let note = out.notification.unwrap();
        assert_eq!(note.dismiss_at(), t0() + chrono::Duration::seconds(5));
        assert!(!note.is_expired(t0() + chrono::Duration::seconds(4)));
        assert!(note.is_expired(t0() + chrono::Duration::seconds(5)));
    }

    #[test]
    fn ruc_switches_selection() {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed("20123456789", &options(), Some("1"));
        assert_eq!(out.next_selection.as_deref(), Some("6"));
        assert!(out.notify());
    }

    #[test]
    fn incomplete_keeps_selection() {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed("1234567890", &options(), Some("6"));
        assert_eq!(out.category, DocumentTypeCategory::Incomplete);
        assert_eq!(out.next_selection.as_deref(), Some("6"));
        assert!(!out.notify());
    }

    #[test]
    fn empty_keeps_selection() {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed("", &options(), None);
        assert_eq!(out.category, DocumentTypeCategory::Unknown);
        assert!(out.next_selection.is_none());
        assert!(!out.notify());
    }

    #[test]
    fn missing_option_keeps_selection() {
        let gate = FormGate::default();
        let opts = vec![DocumentOption::new("1", "DNI")];
        let out = gate.on_identifier_changed("20123456789", &opts, Some("1"));
        assert_eq!(out.next_selection.as_deref(), Some("1"));
        assert!(!out.notify());
    }

    #[test]
    fn already_selected_does_not_renotify() {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed("12345678", &options(), Some("1"));
        assert_eq!(out.next_selection.as_deref(), Some("1"));
        assert!(!out.notify());
    }

    #[test]
    fn normalized_value_returned() {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed("12-345-678", &options(), None);
        assert_eq!(out.normalized, "12345678");
    }

    #[test]
    fn custom_labels() {
        let config = GateConfig {
            national_id_labels: vec!["identidad".into()],
            ..GateConfig::default()
        };
        let gate = FormGate::new(config, false);
        let opts = vec![DocumentOption::new("3", "Documento Nacional de Identidad")];
        let out = gate.on_identifier_changed("12345678", &opts, None);
        assert_eq!(out.next_selection.as_deref(), Some("3"));
    }

    #[test]
    fn initial_mode_from_toggle() {
        assert_eq!(FormGate::new(GateConfig::default(), true).mode(), InvoiceMode::Factura);
        assert_eq!(FormGate::default().mode(), InvoiceMode::Boleta);
    }

    #[test]
    fn country_only_when_enabled() {
        assert!(!GateConfig::default().effective_required_fields().contains(&COUNTRY_FIELD.to_string()));
        let fields = GateConfig::default()
            .with_country_required(true)
            .effective_required_fields();
        assert_eq!(fields.last().map(String::as_str), Some(COUNTRY_FIELD));
    }

    #[test]
    fn config_check_rejects_empty_labels() {
        let config = GateConfig {
            tax_id_labels: vec![" ".into()],
            ..GateConfig::default()
        };
        assert!(config.check().is_err());
        assert!(GateConfig::default().check().is_ok());
    }

    #[test]
    fn huge_delay_saturates_instead_of_overflowing() {
        let config = GateConfig {
            notification_delay_ms: 4_611_686_018_427_387_903,
            ..GateConfig::default()
        };
        let gate = FormGate::new(config, false);
        let note = gate
            .on_identifier_changed_at("12345678", &options(), None, t0())
            .notification
            .unwrap();
        assert_eq!(note.dismiss_at(), DateTime::<Utc>::MAX_UTC);
        assert!(!note.is_expired(t0()));
        assert!(!note.is_expired(Utc::now()));
    }

    #[test]
    fn gate_factura_mode_overrides_stale_snapshot_flag() {
        let mut gate = FormGate::default();
        gate.on_invoice_toggle(true);
        let snap = FormSnapshot::new(false)
            .with("name", "Empresa SAC")
            .with("email", "compras@empresa.pe")
            .with("phone", "+51 999 999 999")
            .with("street", "Av. Larco 123")
            .with("city", "Lima");
        let result = gate.validate(&snap);
        assert_eq!(result.invalid_fields(), vec!["razon_social", "ruc"]);
    }

    #[test]
    fn builder_setters() {
        let config = GateConfig::default()
            .with_notification_delay(Duration::from_millis(1500))
            .with_required_fields(["email"]);
        assert_eq!(config.notification_delay_ms, 1500);
        assert_eq!(config.required_fields, vec!["email".to_string()]);
    }
}
