//! The lot record.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::{FilletType, LotStatus};
use super::weight::{SizeBucket, SizeBucketedWeight};

/// Days between manufacture and expiry when no expiry date is set.
pub const SHELF_LIFE_DAYS: u64 = 364;

/// Errors reported by [`Lot::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LotValidationError {
    /// A bucket of a weight field holds a negative value.
    #[error("{field}.{bucket} must not be negative (got {value})")]
    NegativeWeight {
        /// Name of the weight field.
        field: &'static str,
        /// Offending bucket.
        bucket: SizeBucket,
        /// Value found.
        value: Decimal,
    },
    /// The invoice value is negative.
    #[error("invoiceValue must not be negative (got {0})")]
    NegativeInvoiceValue(Decimal),
}

/// One production batch of fish, tracked from intake through packaging.
///
/// Every weight field is optional; a missing field behaves like an all-zero
/// [`SizeBucketedWeight`]. The keys used by the lot-tracking API
/// (`pesoNotaFiscal`, `qtdMaster`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, alias = "dataProducao")]
    pub production_date: Option<NaiveDate>,
    #[serde(default, alias = "processo")]
    pub process: String,
    #[serde(default, alias = "fornecedor")]
    pub supplier: String,
    #[serde(default, alias = "numeroLote")]
    pub lot_number: String,
    #[serde(default, alias = "numeroNF")]
    pub invoice_number: Option<String>,
    /// Total billed for the raw material of this lot.
    #[serde(default, alias = "valorNF")]
    pub invoice_value: Option<Decimal>,

    #[serde(default, alias = "pesoNotaFiscal")]
    pub invoice_weight: Option<SizeBucketedWeight>,
    #[serde(default, alias = "pesoSalao")]
    pub showroom_weight: Option<SizeBucketedWeight>,
    #[serde(default, alias = "numBasquetas")]
    pub basket_count: Option<SizeBucketedWeight>,

    #[serde(default, alias = "fileInNatura")]
    pub fresh_fillet_weight: Option<SizeBucketedWeight>,
    #[serde(default, alias = "fileCongelado")]
    pub frozen_fillet_weight: Option<SizeBucketedWeight>,
    #[serde(default, alias = "fileEmbalado")]
    pub packaged_fillet_weight: Option<SizeBucketedWeight>,
    /// Material lost in processing. Informational only.
    #[serde(default, alias = "descartes")]
    pub discard_weight: Option<SizeBucketedWeight>,

    #[serde(default, alias = "tipoFile")]
    pub fillet_type: FilletType,
    /// Full master boxes produced.
    #[serde(default, alias = "qtdMaster", alias = "caixas")]
    pub box_count: u32,
    /// Loose packets produced outside full boxes.
    #[serde(default, alias = "qtdSacos", alias = "pacotes")]
    pub packet_count: u32,

    #[serde(default, alias = "dataFabricacao")]
    pub manufacture_date: Option<NaiveDate>,
    #[serde(default, alias = "dataValidade")]
    pub expiry_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: LotStatus,
}

impl Default for Lot {
    fn default() -> Self {
        Self::new()
    }
}

impl Lot {
    /// An empty lot: all weights zero, no packaging, status open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            production_date: None,
            process: String::new(),
            supplier: String::new(),
            lot_number: String::new(),
            invoice_number: None,
            invoice_value: None,
            invoice_weight: Some(SizeBucketedWeight::ZERO),
            showroom_weight: Some(SizeBucketedWeight::ZERO),
            basket_count: Some(SizeBucketedWeight::ZERO),
            fresh_fillet_weight: Some(SizeBucketedWeight::ZERO),
            frozen_fillet_weight: Some(SizeBucketedWeight::ZERO),
            packaged_fillet_weight: Some(SizeBucketedWeight::ZERO),
            discard_weight: Some(SizeBucketedWeight::ZERO),
            fillet_type: FilletType::default(),
            box_count: 0,
            packet_count: 0,
            manufacture_date: None,
            expiry_date: None,
            status: LotStatus::Open,
        }
    }

    /// The explicit expiry date, or manufacture date plus
    /// [`SHELF_LIFE_DAYS`] when only the latter is set.
    #[must_use]
    pub fn effective_expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date.or_else(|| {
            self.manufacture_date
                .and_then(|date| date.checked_add_days(Days::new(SHELF_LIFE_DAYS)))
        })
    }

    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self.status, LotStatus::Finalized)
    }

    /// Weight fields by name, in form order.
    #[must_use]
    pub fn weight_fields(&self) -> [(&'static str, Option<&SizeBucketedWeight>); 7] {
        [
            ("invoiceWeight", self.invoice_weight.as_ref()),
            ("showroomWeight", self.showroom_weight.as_ref()),
            ("basketCount", self.basket_count.as_ref()),
            ("freshFilletWeight", self.fresh_fillet_weight.as_ref()),
            ("frozenFilletWeight", self.frozen_fillet_weight.as_ref()),
            ("packagedFilletWeight", self.packaged_fillet_weight.as_ref()),
            ("discardWeight", self.discard_weight.as_ref()),
        ]
    }

    /// Check the inputs the calculations assume to be non-negative.
    ///
    /// The calculations never require this: they tolerate bad input and
    /// produce meaningless numbers rather than failing. Callers use it to
    /// warn the operator.
    #[must_use]
    pub fn validate(&self) -> Vec<LotValidationError> {
        let mut errors = Vec::new();

        if let Some(value) = self.invoice_value.filter(|value| *value < Decimal::ZERO) {
            errors.push(LotValidationError::NegativeInvoiceValue(value));
        }

        for (field, weight) in self.weight_fields() {
            let Some(weight) = weight else { continue };
            for (bucket, value) in weight.iter() {
                if value < Decimal::ZERO {
                    errors.push(LotValidationError::NegativeWeight {
                        field,
                        bucket,
                        value,
                    });
                }
            }
        }

        errors
    }
}
