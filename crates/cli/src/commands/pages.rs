use chrono::{Datelike, Local};
use rocktober_core::{EventConfig, LineupConfig, RulesConfig};

use crate::render::{landing_page, rules_page};

pub fn info(event: &EventConfig) {
    print!(
        "{}",
        landing_page(event, &LineupConfig::rocktober(), Local::now().year())
    );
}

pub fn rules() {
    print!("{}", rules_page(&RulesConfig::rocktober()));
}
