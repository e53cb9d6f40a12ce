//! Demo directory data for the users pages.

use std::cmp::Ordering;

use system_ui::TextTone;

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Ken", "Frances", "Donald",
];
const LAST_NAMES: [&str; 6] = ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }

    pub fn tone(self) -> TextTone {
        match self {
            Self::Admin => TextTone::Danger,
            Self::Editor => TextTone::Info,
            Self::Viewer => TextTone::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    Role,
}

/// Deterministic directory of 48 users.
pub fn demo_users() -> Vec<DemoUser> {
    LAST_NAMES
        .iter()
        .flat_map(|last| FIRST_NAMES.iter().map(move |first| (*first, *last)))
        .enumerate()
        .map(|(index, (first, last))| {
            let id = index as u32 + 1;
            DemoUser {
                id,
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                role: match id % 7 {
                    0 => Role::Admin,
                    1 | 4 => Role::Editor,
                    _ => Role::Viewer,
                },
                active: id % 5 != 0,
            }
        })
        .collect()
}

pub fn find_user(id: u32) -> Option<DemoUser> {
    demo_users().into_iter().find(|user| user.id == id)
}

/// Case-insensitive match on name or email. A blank query keeps everyone.
pub fn filter_users(users: &[DemoUser], query: &str) -> Vec<DemoUser> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|user| {
            query.is_empty()
                || user.name.to_lowercase().contains(&query)
                || user.email.contains(&query)
        })
        .cloned()
        .collect()
}

/// Stable sort by `column`; ties keep id order.
pub fn sort_users(users: &mut [DemoUser], column: UserColumn, ascending: bool) {
    users.sort_by(|a, b| {
        let ordering = match column {
            UserColumn::Name => a.name.cmp(&b.name),
            UserColumn::Email => a.email.cmp(&b.email),
            UserColumn::Role => a.role.cmp(&b.role),
        };
        let ordering = if ascending {
            ordering
        } else {
            ordering.reverse()
        };
        match ordering {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        }
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn directory_is_deterministic_with_unique_ids() {
        let users = demo_users();
        assert_eq!(users.len(), 48);
        assert_eq!(users[0].name, "Ada Lovelace");
        assert_eq!(users[0].email, "ada.lovelace@example.com");
        assert_eq!(find_user(48).map(|user| user.name), Some("Donald Knuth".to_string()));
        assert_eq!(find_user(49), None);
    }

    #[test]
    fn filter_matches_name_and_email_case_insensitively() {
        let users = demo_users();
        let hits = filter_users(&users, "  HOPPER ");
        assert_eq!(hits.len(), FIRST_NAMES.len());
        assert!(hits.iter().all(|user| user.name.ends_with("Hopper")));
        assert_eq!(filter_users(&users, "").len(), users.len());
        assert!(filter_users(&users, "nobody").is_empty());
    }

    #[test]
    fn sort_descending_breaks_ties_by_id() {
        let mut users = demo_users();
        sort_users(&mut users, UserColumn::Role, false);

        assert_eq!(users[0].role, Role::Viewer);
        let viewers: Vec<u32> = users
            .iter()
            .take_while(|user| user.role == Role::Viewer)
            .map(|user| user.id)
            .collect();
        let mut sorted = viewers.clone();
        sorted.sort_unstable();
        assert_eq!(viewers, sorted);
    }
}
