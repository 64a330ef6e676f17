// Tabular rendering of one side of a comparison

use super::Side;
use crate::routes::RoutingEntry;
use crate::routes::diff::ComparisonResult;
use tabled::builder::Builder;
use tabled::settings::Style;

pub const HEADERS: [&str; 5] = [
    "Destination",
    "NextHop",
    "Via",
    "NhLocalInterface",
    "Routing-Instance",
];

/// The entries `side` has that the other side lacks, as a text table.
pub fn render_side(result: &ComparisonResult, side: Side) -> String {
    let entries = match side {
        Side::Pre => &result.only_in_pre,
        Side::Post => &result.only_in_post,
    };
    render_entries(entries)
}

pub fn render_entries(entries: &[RoutingEntry]) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADERS);

    for entry in entries {
        builder.push_record([
            entry.destination.clone(),
            list_cell(&entry.next_hops),
            list_cell(&entry.via),
            list_cell(&entry.local_interfaces),
            entry.table_name.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

/// `[a b]`, one item per next hop.
fn list_cell(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}
