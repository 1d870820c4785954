//! Task board over the real client and the fake API

use docops::adapters::NotionClient;
use docops::config::DocopsConfig;
use docops::core::models::UNKNOWN_STATUS;
use docops::core::services::TaskBoard;

use crate::common::notion_server::{DATABASE_ID, FakeNotion, TOKEN, page};

#[test]
fn test_ready_tasks_are_flattened() {
    let notion = FakeNotion::start(vec![
        page("p1", "Write docs", Some("Ready"), "2024-06-30T12:00:00.000Z"),
        page("p2", "", Some("Ready"), "2024-07-01T08:30:00.000Z"),
    ]);
    let client = NotionClient::new(TOKEN).unwrap().with_base_url(notion.base_url());
    let config = DocopsConfig::new("Status", "Name");
    let board = TaskBoard::new(&client, &config, DATABASE_ID);

    let tasks = board.query_ready().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Write docs");
    assert_eq!(tasks[0].status, "Ready");
    assert_eq!(tasks[0].last_edited_date(), "2024-06-30");
    assert_eq!(tasks[1].title, "");
}

#[test]
fn test_mismatched_title_property_yields_empty_titles() {
    let notion = FakeNotion::start(vec![page("p1", "Write docs", Some("Ready"), "2024-06-30T12:00:00.000Z")]);
    let client = NotionClient::new(TOKEN).unwrap().with_base_url(notion.base_url());
    let config = DocopsConfig::new("Status", "Task name");
    let board = TaskBoard::new(&client, &config, DATABASE_ID);

    let tasks = board.query_ready().unwrap();
    assert_eq!(tasks[0].title, "");
    assert_ne!(tasks[0].status, UNKNOWN_STATUS);
}

#[test]
fn test_move_then_check_connection() {
    let notion = FakeNotion::start(vec![page("p1", "Write docs", Some("Ready"), "2024-06-30T12:00:00.000Z")]);
    let client = NotionClient::new(TOKEN).unwrap().with_base_url(notion.base_url());
    let config = DocopsConfig::new("Status", "Name");
    let board = TaskBoard::new(&client, &config, DATABASE_ID);

    board.move_task("p1", "In Progress").unwrap();
    board.check_connection().unwrap();

    let methods: Vec<String> = notion.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, ["PATCH", "GET"]);
}
