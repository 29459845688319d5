use std::collections::HashMap;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    models::{HoldingsExportRecord, JoinedHolding, TickerRecord},
    report::format::format_whole_dollars,
};

/// Left-joins the ticker list against the holdings export and renders the
/// nonzero holdings as a newline-delimited summary, largest value first.
/// An empty row set produces an empty string.
pub fn generate_holdings_summary(
    tickers: &[TickerRecord],
    export: &[HoldingsExportRecord],
) -> String {
    let holdings = join_holdings(tickers, export);

    let lines: Vec<String> = holdings
        .iter()
        .map(|h| format!("{} ${}", h.ticker(), format_whole_dollars(*h.market_value())))
        .collect();

    lines.join("\n")
}

/// The join itself: every ticker keeps one row per matching export symbol
/// (none matching leaves the value missing). Missing values default to
/// zero; the coercion to whole dollars truncates rather than rounds, which
/// matches the export's summed-cents contract and deliberately differs
/// from the display formatter. Ticker-less and zero-value rows are
/// dropped, and the survivors are stably sorted by value descending.
pub fn join_holdings(
    tickers: &[TickerRecord],
    export: &[HoldingsExportRecord],
) -> Vec<JoinedHolding> {
    let mut by_symbol: HashMap<&str, Vec<&HoldingsExportRecord>> = HashMap::new();
    for row in export {
        by_symbol.entry(row.symbol().as_str()).or_default().push(row);
    }

    let mut holdings = Vec::new();
    for ticker in tickers {
        if ticker.is_missing() {
            continue;
        }

        match by_symbol.get(ticker.symbol().as_str()) {
            Some(matches) => {
                for row in matches {
                    push_nonzero(&mut holdings, ticker, *row.market_value());
                }
            }
            None => push_nonzero(&mut holdings, ticker, None),
        }
    }

    holdings.sort_by(|a, b| b.market_value().cmp(a.market_value()));
    holdings
}

fn push_nonzero(holdings: &mut Vec<JoinedHolding>, ticker: &TickerRecord, value: Option<Decimal>) {
    let whole_dollars = value
        .unwrap_or(Decimal::ZERO)
        .trunc()
        .to_i64()
        .unwrap_or(0);

    if whole_dollars != 0 {
        holdings.push(JoinedHolding::new(ticker.symbol().clone(), whole_dollars));
    }
}
