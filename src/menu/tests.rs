#![cfg(test)]

use std::io::Cursor;

use super::*;
use crate::collections::linked::list::alloc_failure;

/// Runs the menu over `script` (one entry per line), returning the output and the contents shown
/// by the last display in the script.
fn run_script(script: &[&str], list: SinglyLinkedList) -> (String, Vec<i32>) {
    let input = Cursor::new(script.join("\n") + "\n");
    let mut menu = Menu::with_list(input, Vec::new(), list);
    menu.run().expect("writing to a Vec can't fail");

    let (output, _) = menu.into_parts();
    let output = String::from_utf8(output).expect("menu output is UTF-8");
    let shown = output.lines().rev().find_map(parse_display).unwrap_or_default();
    (output, shown)
}

/// Prompts aren't followed by a newline, so a displayed list shares its line with the prompt.
fn parse_display(line: &str) -> Option<Vec<i32>> {
    if line.ends_with("List is empty.") {
        return Some(Vec::new());
    }

    let (_, values) = line.split_once("List: ")?;
    Some(values.split_whitespace().filter_map(|value| value.parse().ok()).collect())
}

#[test]
fn test_create_and_display() {
    let script = ["1", "3", "10", "20", "30", "4", "5"];
    let (output, shown) = run_script(&script, SinglyLinkedList::new());
    assert!(output.contains("Enter value for node 3: "));
    assert!(output.contains("List: 10 20 30 \n"));
    assert!(output.ends_with("Exiting.\n"));
    assert_eq!(shown, [10, 20, 30]);
}

#[test]
fn test_create_stops_on_invalid_input() {
    let script = ["1", "3", "10", "abc", "4", "5"];
    let (output, shown) = run_script(&script, SinglyLinkedList::new());
    assert!(output.contains("Invalid input. Stopping creation."));
    assert!(!output.contains("Enter value for node 3: "), "Creation should stop at node 2.");
    assert_eq!(shown, [10], "The partial list should be kept.");
}

#[test]
fn test_create_skips_node_out_of_memory() {
    alloc_failure::fail_next();
    let script = ["1", "3", "10", "20", "30", "4"];
    let (output, shown) = run_script(&script, SinglyLinkedList::new());
    assert!(output.contains("Memory error: could not create node."));
    assert!(output.contains("Enter value for node 3: "), "Later values should still be read.");
    assert!(!output.contains("Unknown option."), "No value should be read as a menu choice.");
    assert_eq!(shown, [20, 30]);
}

#[test]
fn test_create_replaces_existing_list() {
    let existing: SinglyLinkedList = [1, 2, 3].into_iter().collect();
    let (_, shown) = run_script(&["1", "1", "9", "4"], existing);
    assert_eq!(shown, [9]);
}

#[test]
fn test_create_rejects_negative_count() {
    let existing: SinglyLinkedList = [1, 2].into_iter().collect();
    let (output, shown) = run_script(&["1", "-2", "4"], existing);
    assert!(output.contains("Invalid number."));
    assert_eq!(shown, [1, 2], "An invalid count shouldn't touch the list.");
}

#[test]
fn test_insert() {
    let script = [
        "2", "1", "2", // at start
        "2", "2", "4", // at end
        "2", "3", "3", "2", // at position 2
        "2", "3", "9", "100", // clamped to the end
        "4",
    ];
    let (_, shown) = run_script(&script, SinglyLinkedList::new());
    assert_eq!(shown, [2, 3, 4, 9]);
}

#[test]
fn test_insert_out_of_memory() {
    let existing: SinglyLinkedList = [1, 2].into_iter().collect();
    alloc_failure::fail_next();
    let (output, shown) = run_script(&["2", "3", "5", "2", "4"], existing);
    assert!(output.contains("Memory error: could not create node."));
    assert_eq!(shown, [1, 2], "A failed insert shouldn't touch the list.");
}

#[test]
fn test_delete() {
    let existing: SinglyLinkedList = [5, 3, 5, 2, 8, 1].into_iter().collect();
    let script = [
        "3", "1", // from start
        "3", "2", // from end
        "3", "3", "2", // at position 2
        "3", "4", "2", // by value
        "4",
    ];
    let (_, shown) = run_script(&script, existing);
    assert_eq!(shown, [3, 8]);
}

#[test]
fn test_reported_conditions() {
    let existing: SinglyLinkedList = [1, 2, 3].into_iter().collect();
    let script = ["3", "3", "100", "3", "4", "7", "4"];
    let (output, shown) = run_script(&script, existing);
    assert!(output.contains("Position 100 out of range. No deletion performed."));
    assert!(output.contains("Value 7 not found in list."));
    assert_eq!(shown, [1, 2, 3]);

    let (output, _) = run_script(&["3", "1", "3", "2", "4"], SinglyLinkedList::new());
    assert_eq!(output.matches("List is empty, nothing to delete.").count(), 2);
    assert!(output.contains("List is empty.\n"));
}

#[test]
fn test_invalid_choices() {
    let script = ["x", "9", "2", "7", "3", "3", "8", "2", "1", "y"];
    let (output, _) = run_script(&script, SinglyLinkedList::new());
    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(output.contains("Unknown option."));
    assert!(output.contains("Unknown insert choice."));
    assert!(output.contains("Unknown delete choice."));
    assert!(output.contains("Invalid input.\n"));
}

#[test]
fn test_exit_releases_list() {
    let existing: SinglyLinkedList = [1, 2, 3].into_iter().collect();
    let input = Cursor::new("5\n4\n");
    let mut menu = Menu::with_list(input, Vec::new(), existing);
    menu.run().expect("writing to a Vec can't fail");
    assert!(menu.list().is_empty());

    let (output, _) = menu.into_parts();
    let output = String::from_utf8(output).expect("menu output is UTF-8");
    assert!(!output.contains("List: "), "Nothing after the exit choice should run.");
}

#[test]
fn test_end_of_input_exits() {
    let mut menu = Menu::new(Cursor::new(""), Vec::new());
    menu.run().expect("writing to a Vec can't fail");
    let (output, list) = menu.into_parts();
    assert!(String::from_utf8_lossy(&output).ends_with("Exiting.\n"));
    assert!(list.is_empty());
}
