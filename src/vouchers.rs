use tracing::debug;

use crate::domain::Voucher;

/// The vouchers on offer. Read-only after startup.
#[derive(Debug, Clone, Default)]
pub struct VoucherBook {
    vouchers: Vec<Voucher>,
}

impl VoucherBook {
    pub fn new(vouchers: Vec<Voucher>) -> Self {
        debug!(count = vouchers.len(), "Voucher book loaded");
        Self { vouchers }
    }

    pub fn all(&self) -> &[Voucher] {
        &self.vouchers
    }

    /// Looks a voucher up by code, ignoring case and surrounding whitespace.
    pub fn find(&self, code: &str) -> Option<&Voucher> {
        let code = code.trim();
        self.vouchers.iter().find(|v| v.code.eq_ignore_ascii_case(code))
    }
}
