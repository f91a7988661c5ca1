use super::parser::parse;

/// What the trend chart should show for the current input text
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSeries {
    /// Nothing typed yet
    Placeholder,
    /// Text present but not parseable (yet)
    Waiting,
    /// `[day, value]`, days numbered from 1
    Points(Vec<[f64; 2]>),
}

/// Builds the live chart series. Any count of readings is plotted; the
/// seven-reading rule only applies when predicting.
pub fn chart_series(raw_text: &str) -> ChartSeries {
    if raw_text.trim().is_empty() {
        return ChartSeries::Placeholder;
    }

    match parse(raw_text) {
        Ok(values) => ChartSeries::Points(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| [(i + 1) as f64, *v])
                .collect(),
        ),
        Err(_) => ChartSeries::Waiting,
    }
}
