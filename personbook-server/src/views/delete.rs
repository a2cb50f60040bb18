//! Delete confirmation page

use std::fmt::Write;

use super::{escape, layout};
use crate::models::Person;

pub fn delete_page(person: &Person) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"    <h1>Delete Person</h1>
    <p>Are you sure you want to delete this person?</p>
    <dl class="details">
      <dt>Name</dt><dd>{name}</dd>
      <dt>Age</dt><dd>{age}</dd>
      <dt>Gender</dt><dd>{gender}</dd>
      <dt>Mobile Number</dt><dd>{mobile}</dd>
    </dl>
    <form method="POST" action="/person/{id}?_method=DELETE">
      <div class="form-actions">
        <button type="submit" class="danger">Delete</button>
        <a href="/person">Cancel</a>
      </div>
    </form>
"#,
        name = escape(&person.name),
        age = person.age,
        gender = person.gender,
        mobile = escape(&person.mobile_number),
        id = person.id,
    );
    layout("Delete Person", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn confirmation_posts_delete_override() {
        let now = Utc::now();
        let person = Person {
            id: Uuid::new_v4(),
            name: "Margaret".into(),
            age: 33,
            gender: Gender::Female,
            mobile_number: "555-0142".into(),
            created_at: now,
            updated_at: now,
        };
        let html = delete_page(&person);
        assert!(html.contains(&format!("/person/{}?_method=DELETE", person.id)));
        assert!(html.contains("<dd>Margaret</dd>"));
        assert!(html.contains("<dd>Female</dd>"));
    }
}
