//! Person list page

use std::fmt::Write;

use super::{escape, layout};
use crate::models::Person;

/// Render the table of persons in the order given.
pub fn list_page(people: &[Person]) -> String {
    let mut body = String::from(
        r#"    <header class="page-header">
      <h1>People</h1>
      <a class="button" href="/person/new">Add Person</a>
    </header>
"#,
    );

    if people.is_empty() {
        body.push_str("    <p class=\"empty\">No people found. Add the first one.</p>\n");
        return layout("People", &body);
    }

    body.push_str(
        r#"    <table>
      <thead>
        <tr>
          <th>Name</th>
          <th>Age</th>
          <th>Gender</th>
          <th>Mobile Number</th>
          <th>Created</th>
          <th>Actions</th>
        </tr>
      </thead>
      <tbody>
"#,
    );

    for person in people {
        let _ = write!(
            body,
            r#"        <tr>
          <td>{name}</td>
          <td>{age}</td>
          <td>{gender}</td>
          <td>{mobile}</td>
          <td>{created}</td>
          <td class="actions">
            <a href="/person/{id}/edit">Edit</a>
            <a class="danger" href="/person/{id}/delete">Delete</a>
          </td>
        </tr>
"#,
            name = escape(&person.name),
            age = person.age,
            gender = person.gender,
            mobile = escape(&person.mobile_number),
            created = person.created_at.format("%Y-%m-%d %H:%M"),
            id = person.id,
        );
    }

    body.push_str("      </tbody>\n    </table>\n");
    layout("People", &body)
}
