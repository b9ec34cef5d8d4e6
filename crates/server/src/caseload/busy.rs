use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use shared_types::{BusyDay, CaseRecord, TrackerSettings};

use crate::compliance::calendar::format_date_with_weekday;

#[derive(Debug, Default)]
pub(crate) struct DayLoad<'a> {
    pub case_count: usize,
    pub parts: BTreeSet<&'a str>,
}

impl DayLoad<'_> {
    pub fn is_busy(&self, settings: &TrackerSettings) -> bool {
        self.case_count > settings.busy_min_cases || self.parts.len() > settings.busy_min_parts
    }
}

/// Cases and distinct court parts per next court date.
pub(crate) fn court_day_loads<'a, I>(cases: I) -> BTreeMap<NaiveDate, DayLoad<'a>>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    let mut loads: BTreeMap<NaiveDate, DayLoad<'a>> = BTreeMap::new();
    for case in cases {
        let Some(date) = case.next_court_date else {
            continue;
        };
        let load = loads.entry(date).or_default();
        load.case_count += 1;
        if !case.court_part.is_empty() {
            load.parts.insert(case.court_part.as_str());
        }
    }
    loads
}

/// Court days from `today` on with more than `busy_min_cases` cases or more
/// than `busy_min_parts` distinct parts, soonest first.
pub fn busy_days<'a, I>(cases: I, settings: &TrackerSettings, today: NaiveDate) -> Vec<BusyDay>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    court_day_loads(cases)
        .into_iter()
        .filter(|(date, load)| *date >= today && load.is_busy(settings))
        .map(|(date, load)| BusyDay {
            date,
            label: format_date_with_weekday(date),
            case_count: load.case_count,
            parts: load.parts.into_iter().map(str::to_string).collect(),
        })
        .collect()
}
