//! Upload row synthesis: fixed constants, charge profiles, and tax math.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::extract::dates::normalize_date;
use crate::models::invoice::ExtractedInvoice;

/// Output format for entry, posting and vendor invoice dates.
pub const ROW_DATE_FORMAT: &str = "%d-%b-%Y";

/// The full upload record. Field order is the column order the accounting
/// system expects; the leading space in " Charge Narration" is part of the
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Entry Date")]
    pub entry_date: String,
    #[serde(rename = "Posting Date")]
    pub posting_date: String,
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Organization Branch")]
    pub organization_branch: String,
    #[serde(rename = "Vendor Inv No")]
    pub vendor_inv_no: String,
    #[serde(rename = "Vendor Inv Date")]
    pub vendor_inv_date: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "ExchRate")]
    pub exch_rate: String,
    #[serde(rename = "Narration")]
    pub narration: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Charge or GL")]
    pub charge_or_gl: String,
    #[serde(rename = "Charge or GL Name")]
    pub charge_or_gl_name: String,
    #[serde(rename = "Charge or GL Amount")]
    pub charge_or_gl_amount: String,
    #[serde(rename = "DR or CR")]
    pub dr_or_cr: String,
    #[serde(rename = "Cost Center")]
    pub cost_center: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = " Charge Narration")]
    pub charge_narration: String,
    #[serde(rename = "TaxGroup")]
    pub tax_group: String,
    #[serde(rename = "Tax Type")]
    pub tax_type: String,
    #[serde(rename = "SAC or HSN")]
    pub sac_or_hsn: String,
    #[serde(rename = "Taxcode1")]
    pub taxcode1: String,
    #[serde(rename = "Taxcode1 Amt")]
    pub taxcode1_amt: String,
    #[serde(rename = "Taxcode2")]
    pub taxcode2: String,
    #[serde(rename = "Taxcode2 Amt")]
    pub taxcode2_amt: String,
    #[serde(rename = "Taxcode3")]
    pub taxcode3: String,
    #[serde(rename = "Taxcode3 Amt")]
    pub taxcode3_amt: String,
    #[serde(rename = "Taxcode4")]
    pub taxcode4: String,
    #[serde(rename = "Taxcode4 Amt")]
    pub taxcode4_amt: String,
    #[serde(rename = "Avail Tax Credit")]
    pub avail_tax_credit: String,
    #[serde(rename = "LOB")]
    pub lob: String,
    #[serde(rename = "Ref Type")]
    pub ref_type: String,
    #[serde(rename = "Ref No")]
    pub ref_no: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date")]
    pub end_date: String,
    #[serde(rename = "WH Tax Code")]
    pub wh_tax_code: String,
    #[serde(rename = "WH Tax Percentage")]
    pub wh_tax_percentage: String,
    #[serde(rename = "WH Tax Taxable")]
    pub wh_tax_taxable: String,
    #[serde(rename = "WH Tax Amount")]
    pub wh_tax_amount: String,
    #[serde(rename = "Round Off")]
    pub round_off: String,
    #[serde(rename = "CC Code")]
    pub cc_code: String,
}

impl OutputRow {
    /// Row carrying the fixed organizational constants; every other
    /// column starts as the empty string.
    fn base() -> Self {
        Self {
            organization_branch: "AHMEDABAD".to_string(),
            currency: "INR".to_string(),
            exch_rate: "1".to_string(),
            charge_or_gl: "Charge".to_string(),
            dr_or_cr: "DR".to_string(),
            branch: "GUJARAT".to_string(),
            sac_or_hsn: "996793".to_string(),
            lob: "CCL IMP".to_string(),
            wh_tax_code: "194C".to_string(),
            wh_tax_percentage: "2".to_string(),
            round_off: "Yes".to_string(),
            ..Self::default()
        }
    }
}

/// The two mutually exclusive charge shapes a row can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeProfile {
    /// Road transport charge, forward-charge GST.
    Transport,
    /// Container freight station charge, pure agent.
    NonTransport,
}

/// Profile-determined columns, resolved in one place per arm so the
/// branch never mutates the row piecemeal.
struct ProfileFields {
    charge_name: &'static str,
    tax_type: &'static str,
    tax_group: &'static str,
    tax_credit: &'static str,
    sac_or_hsn: &'static str,
    taxcode1: String,
    taxcode1_amt: String,
    taxcode2: String,
    taxcode2_amt: String,
    charge_amount: String,
    amount: String,
    wh_tax_taxable: String,
}

impl ChargeProfile {
    /// Resolve the profile for a record.
    pub fn for_invoice(invoice: &ExtractedInvoice) -> Self {
        if invoice.is_transport {
            Self::Transport
        } else {
            Self::NonTransport
        }
    }

    fn fields(self, invoice: &ExtractedInvoice) -> ProfileFields {
        match self {
            // Transport Charges _ FCM: CGST/SGST at 6% of the total amount
            Self::Transport => {
                let gst = percent_of(&invoice.total_amount, Decimal::new(6, 2));
                ProfileFields {
                    charge_name: "Transport Charges _ FCM",
                    tax_type: "Taxable",
                    tax_group: "GSTIN",
                    tax_credit: "100",
                    sac_or_hsn: "996793",
                    taxcode1: "CGST".to_string(),
                    taxcode1_amt: gst.clone(),
                    taxcode2: "SGST".to_string(),
                    taxcode2_amt: gst,
                    charge_amount: invoice.total_amount.clone(),
                    amount: invoice.total_amount.clone(),
                    wh_tax_taxable: invoice.total_amount.clone(),
                }
            }
            // CFS CHARGES (1): pure agent, no GST codes
            Self::NonTransport => ProfileFields {
                charge_name: "CFS CHARGES (1)",
                tax_type: "Pure Agent",
                tax_group: "GSTIN",
                tax_credit: "No",
                sac_or_hsn: "996711",
                taxcode1: String::new(),
                taxcode1_amt: String::new(),
                taxcode2: String::new(),
                taxcode2_amt: String::new(),
                charge_amount: invoice.total_invoice_amount.clone(),
                amount: invoice.total_invoice_amount.clone(),
                wh_tax_taxable: invoice.total_amount.clone(),
            },
        }
    }
}

/// Merge the constant fields, the extracted record and the resolved
/// charge profile into a complete upload row.
pub fn synthesize_row(invoice: &ExtractedInvoice, run_date: NaiveDate) -> OutputRow {
    let mut row = OutputRow::base();
    let today = run_date.format(ROW_DATE_FORMAT).to_string();

    row.entry_date = today.clone();
    row.posting_date = today;
    row.organization = invoice.organization.clone();
    row.vendor_inv_no = invoice.vendor_inv_no.clone();
    row.vendor_inv_date = if invoice.vendor_inv_date.is_empty() {
        String::new()
    } else {
        normalize_date(&invoice.vendor_inv_date, ROW_DATE_FORMAT)
    };
    row.ref_no = invoice.ref_no.clone();
    row.narration = narration_for(&invoice.ref_no);

    let fields = ChargeProfile::for_invoice(invoice).fields(invoice);
    row.charge_or_gl_name = fields.charge_name.to_string();
    row.tax_type = fields.tax_type.to_string();
    row.tax_group = fields.tax_group.to_string();
    row.avail_tax_credit = fields.tax_credit.to_string();
    row.sac_or_hsn = fields.sac_or_hsn.to_string();
    row.taxcode1 = fields.taxcode1;
    row.taxcode1_amt = fields.taxcode1_amt;
    row.taxcode2 = fields.taxcode2;
    row.taxcode2_amt = fields.taxcode2_amt;
    row.charge_or_gl_amount = fields.charge_amount;
    row.amount = fields.amount;
    row.wh_tax_taxable = fields.wh_tax_taxable;
    // Section 194C withholding at 2% of the taxable base
    row.wh_tax_amount = percent_of(&row.wh_tax_taxable, Decimal::new(2, 2));

    row
}

/// Fixed narration template embedding the resolved reference number.
fn narration_for(ref_no: &str) -> String {
    format!(
        "BEING CHARGES PAID TO HASTI PETRO CHEMICAL A/C ADVICS {}",
        ref_no
    )
}

/// `rate` of a decimal-string base, rounded to 2 places. "0" when the
/// base is not numeric.
fn percent_of(base: &str, rate: Decimal) -> String {
    match Decimal::from_str(base.trim()) {
        Ok(value) => format_rounded((value * rate).round_dp(2)),
        Err(_) => "0".to_string(),
    }
}

/// Render a rounded amount the way the upload system expects: integral
/// values keep one decimal place, fractional values drop trailing zeros.
fn format_rounded(value: Decimal) -> String {
    let rendered = value.normalize().to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_invoice(is_transport: bool) -> ExtractedInvoice {
        ExtractedInvoice {
            organization: "HASTI PETRO CHEMICAL & SHIPPING LTD.".to_string(),
            vendor_inv_no: "ABC/123".to_string(),
            vendor_inv_date: "13-06-2025".to_string(),
            boe_no: "123456".to_string(),
            boe_date: "15-06-2025".to_string(),
            bl_no: "XYZ789".to_string(),
            total_amount: "1000".to_string(),
            total_invoice_amount: "1200.00".to_string(),
            cgst: "30.00".to_string(),
            sgst: "30.00".to_string(),
            ref_no: "JOB-77".to_string(),
            is_transport,
        }
    }

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn test_transport_branch_populates_gst_codes() {
        let row = synthesize_row(&sample_invoice(true), run_date());

        assert_eq!(row.charge_or_gl_name, "Transport Charges _ FCM");
        assert_eq!(row.tax_type, "Taxable");
        assert_eq!(row.tax_group, "GSTIN");
        assert_eq!(row.avail_tax_credit, "100");
        assert_eq!(row.taxcode1, "CGST");
        assert_eq!(row.taxcode1_amt, "60.0");
        assert_eq!(row.taxcode2, "SGST");
        assert_eq!(row.taxcode2_amt, "60.0");
        assert_eq!(row.sac_or_hsn, "996793");
        assert_eq!(row.charge_or_gl_amount, "1000");
        assert_eq!(row.amount, "1000");
        assert_eq!(row.wh_tax_taxable, "1000");
        assert_eq!(row.wh_tax_amount, "20.0");
    }

    #[test]
    fn test_cfs_branch_leaves_gst_codes_blank() {
        let row = synthesize_row(&sample_invoice(false), run_date());

        assert_eq!(row.charge_or_gl_name, "CFS CHARGES (1)");
        assert_eq!(row.tax_type, "Pure Agent");
        assert_eq!(row.tax_group, "GSTIN");
        assert_eq!(row.avail_tax_credit, "No");
        assert_eq!(row.taxcode1, "");
        assert_eq!(row.taxcode1_amt, "");
        assert_eq!(row.taxcode2, "");
        assert_eq!(row.taxcode2_amt, "");
        assert_eq!(row.sac_or_hsn, "996711");
        assert_eq!(row.charge_or_gl_amount, "1200.00");
        assert_eq!(row.amount, "1200.00");
        assert_eq!(row.wh_tax_taxable, "1000");
        assert_eq!(row.wh_tax_amount, "20.0");
    }

    #[test]
    fn test_constant_fields_are_present() {
        let row = synthesize_row(&sample_invoice(false), run_date());

        assert_eq!(row.organization_branch, "AHMEDABAD");
        assert_eq!(row.currency, "INR");
        assert_eq!(row.exch_rate, "1");
        assert_eq!(row.charge_or_gl, "Charge");
        assert_eq!(row.dr_or_cr, "DR");
        assert_eq!(row.branch, "GUJARAT");
        assert_eq!(row.lob, "CCL IMP");
        assert_eq!(row.wh_tax_code, "194C");
        assert_eq!(row.wh_tax_percentage, "2");
        assert_eq!(row.round_off, "Yes");
        assert_eq!(row.due_date, "");
        assert_eq!(row.cc_code, "");
    }

    #[test]
    fn test_dates_are_stamped_and_normalized() {
        let row = synthesize_row(&sample_invoice(true), run_date());

        assert_eq!(row.entry_date, "20-Jun-2025");
        assert_eq!(row.posting_date, "20-Jun-2025");
        assert_eq!(row.vendor_inv_date, "13-Jun-2025");
    }

    #[test]
    fn test_narration_embeds_reference_number() {
        let row = synthesize_row(&sample_invoice(true), run_date());
        assert_eq!(
            row.narration,
            "BEING CHARGES PAID TO HASTI PETRO CHEMICAL A/C ADVICS JOB-77"
        );
    }

    #[test]
    fn test_fractional_amounts_round_to_two_places() {
        let mut invoice = sample_invoice(true);
        invoice.total_amount = "1234.56".to_string();
        let row = synthesize_row(&invoice, run_date());

        assert_eq!(row.taxcode1_amt, "74.07");
        assert_eq!(row.wh_tax_amount, "24.69");
    }

    #[test]
    fn test_wh_tax_amount_falls_back_on_non_numeric_base() {
        let mut invoice = sample_invoice(false);
        invoice.total_amount = "Not Found".to_string();
        let row = synthesize_row(&invoice, run_date());

        assert_eq!(row.wh_tax_amount, "0");
    }

    #[test]
    fn test_profile_resolution() {
        assert_eq!(
            ChargeProfile::for_invoice(&sample_invoice(true)),
            ChargeProfile::Transport
        );
        assert_eq!(
            ChargeProfile::for_invoice(&sample_invoice(false)),
            ChargeProfile::NonTransport
        );
    }
}
