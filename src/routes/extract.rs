// Flattens a decoded route-information document into routing entries

use super::parser::{RawDocument, Rt, RtEntry};
use super::{EntrySelection, InstanceFilter, RoutingEntry};

/// Extract the entries of every table the filter admits, in document order.
pub fn extract(
    document: &RawDocument,
    filter: &InstanceFilter,
    selection: EntrySelection,
) -> Vec<RoutingEntry> {
    let mut entries = Vec::new();

    for table in &document.route_information.tables {
        if !filter.includes(&table.table_name) {
            continue;
        }

        for rt in &table.destinations {
            match selection {
                EntrySelection::Active => {
                    entries.push(build_entry(&table.table_name, rt, select_entry(rt)));
                }
                EntrySelection::Every => {
                    for rt_entry in &rt.entries {
                        entries.push(build_entry(&table.table_name, rt, Some(rt_entry)));
                    }
                }
            }
        }
    }

    entries
}

/// The active `<rt-entry>`, else the first one.
fn select_entry(rt: &Rt) -> Option<&RtEntry> {
    rt.entries
        .iter()
        .find(|entry| entry.is_active())
        .or_else(|| rt.entries.first())
}

fn build_entry(table_name: &str, rt: &Rt, rt_entry: Option<&RtEntry>) -> RoutingEntry {
    let hops = rt_entry.map(|e| e.next_hops.as_slice()).unwrap_or_default();

    RoutingEntry {
        table_name: table_name.to_string(),
        destination: rt.destination.clone(),
        next_hops: hops.iter().map(|nh| nh.to.clone()).collect(),
        via: hops.iter().map(|nh| nh.via.clone()).collect(),
        local_interfaces: hops.iter().map(|nh| nh.local_interface.clone()).collect(),
    }
}
