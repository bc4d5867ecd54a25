//! Panel alignment
//!
//! Turns an unordered batch of bars into per-instrument series sorted by
//! trade date. Sorting happens here rather than being a caller obligation,
//! and a repeated date within one instrument is rejected because it would
//! shift the wrong close into `prev_close`.

use std::collections::BTreeMap;

use limitup_core::{DailyBar, InstrumentId, Price, TradeDate};
use limitup_ports::{PanelError, PanelResult};
use log::debug;
use rust_decimal::Decimal;

/// Date-ordered bars of a single instrument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentSeries {
    instrument: InstrumentId,
    bars: Vec<DailyBar>,
    /// 1-based input row of each bar
    rows: Vec<usize>,
}

impl InstrumentSeries {
    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    /// Bars in ascending trade-date order
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Input row numbers, parallel to [`InstrumentSeries::bars`]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Each bar paired with the close of the session before it
    pub fn with_prev_close(&self) -> impl Iterator<Item = (&DailyBar, Option<Price>)> + '_ {
        let prev = std::iter::once(None).chain(self.bars.iter().map(|b| Some(b.close)));
        self.bars.iter().zip(prev)
    }
}

/// A validated panel: positive prices, unique `(instrument, trade_date)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    series: BTreeMap<InstrumentId, InstrumentSeries>,
}

impl Panel {
    /// Validate, partition and sort a batch of bars
    ///
    /// Row numbers in errors are 1-based positions in `bars`.
    pub fn new(bars: Vec<DailyBar>) -> PanelResult<Self> {
        let mut partitions: BTreeMap<InstrumentId, Vec<(usize, DailyBar)>> = BTreeMap::new();

        for (idx, bar) in bars.into_iter().enumerate() {
            let row = idx + 1;
            validate_prices(row, &bar)?;
            partitions
                .entry(bar.instrument.clone())
                .or_default()
                .push((row, bar));
        }

        let mut series = BTreeMap::new();
        for (instrument, mut entries) in partitions {
            // stable: equal dates keep input order until rejected below
            entries.sort_by_key(|(_, b)| b.trade_date);

            if let Some(pair) = entries
                .windows(2)
                .find(|w| w[0].1.trade_date == w[1].1.trade_date)
            {
                return Err(PanelError::InputOrdering {
                    instrument,
                    trade_date: pair[1].1.trade_date,
                });
            }

            let (rows, bars): (Vec<usize>, Vec<DailyBar>) = entries.into_iter().unzip();
            debug!("Aligned {} bars for {}", bars.len(), instrument);
            series.insert(
                instrument.clone(),
                InstrumentSeries {
                    instrument,
                    bars,
                    rows,
                },
            );
        }

        Ok(Self { series })
    }

    /// Series in instrument order
    pub fn series(&self) -> impl Iterator<Item = &InstrumentSeries> {
        self.series.values()
    }

    pub fn get(&self, instrument: &InstrumentId) -> Option<&InstrumentSeries> {
        self.series.get(instrument)
    }

    pub fn instrument_count(&self) -> usize {
        self.series.len()
    }

    /// Total number of bars across instruments
    pub fn bar_count(&self) -> usize {
        self.series.values().map(InstrumentSeries::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Keep only sessions on or before `date`
    ///
    /// History before the date is retained so the last session still has its
    /// previous close. Instruments with nothing left are dropped.
    pub fn through(&self, date: TradeDate) -> Panel {
        let series = self
            .series
            .iter()
            .filter_map(|(instrument, s)| {
                let kept = s.bars.iter().take_while(|b| b.trade_date <= date).count();
                (kept > 0).then(|| {
                    (
                        instrument.clone(),
                        InstrumentSeries {
                            instrument: instrument.clone(),
                            bars: s.bars[..kept].to_vec(),
                            rows: s.rows[..kept].to_vec(),
                        },
                    )
                })
            })
            .collect();

        Panel { series }
    }
}

fn validate_prices(row: usize, bar: &DailyBar) -> PanelResult<()> {
    for (column, price) in bar.prices() {
        if price <= Decimal::ZERO {
            return Err(PanelError::invalid_value(
                row,
                column,
                price.to_string(),
                "price must be positive",
            ));
        }
    }
    Ok(())
}
