use crate::correlate::LagCorrelation;
use std::io::{self, Write};

/// Write one `lag: coefficient` line per lag, with lags converted back to
/// time units.
pub fn write_report<W: Write>(
    writer: &mut W,
    corr: &[LagCorrelation],
    bin_duration: u64,
    precision: usize,
) -> io::Result<()> {
    for lag_corr in corr {
        writeln!(
            writer,
            "{}: {}",
            lag_corr.lag * bin_duration as i64,
            format_general(lag_corr.coefficient, precision)
        )?;
    }
    Ok(())
}

/// Format a float with `precision` significant digits, `%g` style.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise. Trailing zeros are
/// dropped in both cases.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(num: &str) -> &str {
    if num.contains('.') {
        num.trim_end_matches('0').trim_end_matches('.')
    } else {
        num
    }
}
