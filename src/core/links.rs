//! Checkout edit-link rewriting on the payment page.
//!
//! Links back to the address step carry `from_payment=1` so the checkout
//! returns to payment after editing instead of restarting the flow.

use std::borrow::Cow;

/// Query parameter appended to checkout edit links.
pub const FROM_PAYMENT_PARAM: &str = "from_payment=1";

/// Whether an href points back into the checkout address step.
pub fn is_checkout_edit_link(href: &str) -> bool {
    href.contains("checkout") || href.contains("address")
}

/// Append `from_payment=1` unless already present.
pub fn with_from_payment(href: &str) -> Cow<'_, str> {
    if href.is_empty() || href.contains(FROM_PAYMENT_PARAM) {
        return Cow::Borrowed(href);
    }
    let (base, fragment) = match href.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (href, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    let mut out = format!("{base}{separator}{FROM_PAYMENT_PARAM}");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Cow::Owned(out)
}

/// Rewrite a link only when it is a checkout edit link.
pub fn rewrite_edit_link(href: &str) -> Cow<'_, str> {
    if is_checkout_edit_link(href) {
        with_from_payment(href)
    } else {
        Cow::Borrowed(href)
    }
}
