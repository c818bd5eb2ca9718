use todoist_client::capability::Filterable;
use todoist_client::filter::{is_scheduled, partition};
use todoist_client::models::{Color, Due, Project, Task, ViewStyle};
use todoist_client::sort::{by_due_datetime, by_order, by_priority, due_instant, sort_by};
use todoist_client::{Projects, Tasks};

fn task(id: &str, priority: i64, datetime: Option<&str>) -> Task {
    Task {
        id: id.to_string(),
        project_id: "100".to_string(),
        section_id: None,
        content: format!("Task {}", id),
        description: String::new(),
        is_completed: false,
        labels: Vec::new(),
        parent_id: None,
        order: id.parse().unwrap_or(0),
        priority,
        due: datetime.map(|dt| Due {
            string: "someday".to_string(),
            date: "2025-01-15".to_string(),
            is_recurring: false,
            datetime: Some(dt.to_string()),
            timezone: None,
        }),
        duration: None,
        url: String::new(),
        comment_count: 0,
        created_at: "2025-01-01T00:00:00Z".to_string(),
        creator_id: "1".to_string(),
        assignee_id: None,
        assigner_id: None,
    }
}

fn project(id: &str, name: &str, order: i64, is_favorite: bool) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        color: Color::Blue,
        parent_id: None,
        order,
        comment_count: 0,
        is_shared: false,
        is_favorite,
        is_inbox_project: false,
        is_team_inbox: false,
        view_style: ViewStyle::List,
        url: String::new(),
    }
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_partition_keeps_order_and_totality() {
    let tasks = vec![
        task("1", 1, Some("2025-01-15T09:00:00Z")),
        task("2", 2, None),
        task("3", 3, Some("2025-01-14T09:00:00Z")),
        task("4", 4, None),
        task("5", 1, Some("2025-01-16T09:00:00Z")),
    ];

    let (scheduled, rest) = partition(tasks.clone(), is_scheduled);

    assert_eq!(ids(&scheduled), vec!["1", "3", "5"]);
    assert_eq!(ids(&rest), vec!["2", "4"]);
    assert_eq!(scheduled.len() + rest.len(), tasks.len());
    for t in &tasks {
        let in_scheduled = scheduled.contains(t);
        let in_rest = rest.contains(t);
        assert!(in_scheduled ^ in_rest, "task {} must land in exactly one side", t.id);
    }
}

fn favorites_first<T: Filterable>(items: Vec<T>, is_favorite: impl Fn(&T) -> bool) -> Vec<T> {
    let (mut first, rest) = partition(items, is_favorite);
    first.extend(rest);
    first
}

#[test]
fn test_helpers_generic_over_filterable() {
    let projects = vec![
        project("1", "Work", 1, false),
        project("2", "Personal", 2, true),
    ];
    let ordered = favorites_first(projects, |p| p.is_favorite);
    assert_eq!(ordered[0].name, "Personal");

    let tasks = vec![task("1", 1, None), task("2", 4, None)];
    let ordered = favorites_first(tasks, |t| t.priority == 4);
    assert_eq!(ids(&ordered), vec!["2", "1"]);
}

#[test]
fn test_partition_empty_input() {
    let (matching, rest) = partition(Vec::<Task>::new(), |_| true);
    assert!(matching.is_empty());
    assert!(rest.is_empty());
}

#[test]
fn test_partition_constant_predicates() {
    let tasks = vec![task("1", 1, None), task("2", 2, None)];

    let (all, none) = partition(tasks.clone(), |_| true);
    assert_eq!(all.len(), 2);
    assert!(none.is_empty());

    let (none, all) = partition(tasks, |_| false);
    assert!(none.is_empty());
    assert_eq!(all.len(), 2);
}

#[test]
fn test_empty_datetime_is_not_scheduled() {
    let mut t = task("1", 1, Some(""));
    assert!(!is_scheduled(&t));

    t.due = None;
    assert!(!is_scheduled(&t));

    // date only, no time
    t = task("2", 1, None);
    t.due = Some(Due {
        string: "today".to_string(),
        date: "2025-01-15".to_string(),
        is_recurring: false,
        datetime: None,
        timezone: None,
    });
    assert!(!is_scheduled(&t));
}

#[test]
fn test_sort_by_priority_descending() {
    let mut tasks = vec![task("1", 1, None), task("2", 4, None), task("3", 2, None)];

    sort_by(&mut tasks, by_priority);

    let priorities: Vec<i64> = tasks.iter().map(|t| t.priority).collect();
    assert_eq!(priorities, vec![4, 2, 1]);
}

#[test]
fn test_sort_by_priority_is_stable() {
    let mut tasks = vec![task("1", 2, None), task("2", 4, None), task("3", 2, None)];

    sort_by(&mut tasks, by_priority);

    assert_eq!(ids(&tasks), vec!["2", "1", "3"]);
}

#[test]
fn test_sort_by_due_puts_unparseable_first() {
    let mut tasks = vec![
        task("1", 1, Some("2025-01-16T09:00:00Z")),
        task("2", 1, Some("not a timestamp")),
        task("3", 1, Some("2025-01-14T09:00:00+02:00")),
        task("4", 1, None),
        task("5", 1, Some("2025-01-15T09:00:00Z")),
        task("6", 1, Some("2025-01-15T12:00:00")),
    ];

    sort_by(&mut tasks, by_due_datetime);

    // 2, 4 and 6 have no valid RFC3339 timestamp and keep their relative order
    assert_eq!(ids(&tasks), vec!["2", "4", "6", "3", "5", "1"]);
}

#[test]
fn test_due_instant_compares_across_offsets() {
    let utc = task("1", 1, Some("2025-01-15T08:00:00Z"));
    let plus_two = task("2", 1, Some("2025-01-15T09:00:00+02:00"));

    // 09:00+02:00 is 07:00Z
    assert!(due_instant(&plus_two) < due_instant(&utc));
    assert!(due_instant(&task("3", 1, Some("garbage"))).is_none());
}

#[test]
fn test_tasks_collection_helpers() {
    let mut tasks = Tasks::from(vec![
        task("1", 1, Some("2025-01-15T09:00:00Z")),
        task("2", 3, None),
        task("3", 2, Some("2025-01-14T09:00:00Z")),
    ]);

    tasks.sort_by(by_priority);
    assert_eq!(ids(&tasks), vec!["2", "3", "1"]);
    assert_eq!(tasks.find_id("3").map(|t| t.priority), Some(2));
    assert_eq!(tasks.in_project("100").len(), 3);

    let (mut scheduled, unscheduled) = tasks.scheduled();
    scheduled.sort_by(by_due_datetime);
    assert_eq!(ids(&scheduled), vec!["3", "1"]);
    assert_eq!(ids(&unscheduled), vec!["2"]);
}

#[test]
fn test_projects_partition_and_sort() {
    let projects = Projects::from(vec![
        project("1", "Work", 3, true),
        project("2", "Personal", 1, false),
        project("3", "Errands", 2, true),
    ]);

    let (mut favorites, others) = projects.partition(|p| p.is_favorite);
    assert_eq!(others.len(), 1);

    favorites.sort_by(by_order);
    let names: Vec<&str> = favorites.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Errands", "Work"]);
}

#[test]
fn test_projects_find_name_first_match() {
    let mut child = project("4", "Inbox", 4, false);
    child.parent_id = Some("1".to_string());
    let projects = Projects::from(vec![
        project("1", "Work", 1, false),
        project("2", "Work", 2, false),
        child,
    ]);

    assert_eq!(projects.find_name("Work").map(|p| p.id.as_str()), Some("1"));
    assert!(projects.find_name("work").is_none());
    assert_eq!(projects.children_of("1").len(), 1);
    assert_eq!(projects.find_id("2").map(|p| p.order), Some(2));
}
