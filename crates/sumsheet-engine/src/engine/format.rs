/// Decimal places used for numbers in formulas and display strings.
pub const NUMBER_PRECISION: usize = 6;

/// Format a number in fixed-point notation with [`NUMBER_PRECISION`] decimals.
pub fn format_number(n: f64) -> String {
    format!("{:.*}", NUMBER_PRECISION, n)
}

/// Format a number so that it fits in a cell `width` characters wide.
///
/// Decimals are dropped (with rounding) until the text fits. When not even
/// the integer part fits, the cell is filled with `#` instead of showing a
/// number with missing leading digits.
pub fn format_display(n: f64, width: usize) -> String {
    let full = format_number(n);
    if full.len() <= width {
        return full;
    }
    for precision in (0..NUMBER_PRECISION).rev() {
        let shorter = format!("{:.*}", precision, n);
        if shorter.len() <= width {
            return shorter;
        }
    }
    "#".repeat(width)
}
