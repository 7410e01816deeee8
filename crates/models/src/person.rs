use serde::Serialize;

/// Role-specific payload. The set of roles is closed; authorization checks in
/// the service layer are a match on this tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Role {
    Student { major: String, year: u32 },
    Instructor { department: String, office: String },
    Admin,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Student { .. } => "STUDENT",
            Role::Instructor { .. } => "INSTRUCTOR",
            Role::Admin => "ADMIN",
        }
    }
}

/// A person known to the system: student, instructor, or administrator.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl Person {
    pub fn student(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        year: u32,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role: Role::Student {
                major: major.into(),
                year,
            },
        }
    }

    pub fn instructor(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        office: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role: Role::Instructor {
                department: department.into(),
                office: office.into(),
            },
        }
    }

    pub fn admin(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role: Role::Admin,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_student(&self) -> bool {
        matches!(self.role, Role::Student { .. })
    }

    pub fn is_instructor(&self) -> bool {
        matches!(self.role, Role::Instructor { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tags() {
        let student = Person::student("S1", "Jane", "Doe", "jane@uni.edu", "CS", 2);
        let instructor = Person::instructor("I1", "Alice", "Smith", "alice@uni.edu", "CS", "GHC 4102");
        let admin = Person::admin("A1", "Sam", "Root", "sam@uni.edu");

        assert!(student.is_student() && !student.is_admin());
        assert!(instructor.is_instructor() && !instructor.is_student());
        assert!(admin.is_admin() && !admin.is_instructor());

        assert_eq!(student.role.name(), "STUDENT");
        assert_eq!(instructor.role.name(), "INSTRUCTOR");
        assert_eq!(admin.role.name(), "ADMIN");
    }

    #[test]
    fn full_name_joins_parts() {
        let person = Person::admin("A1", "Sam", "Root", "sam@uni.edu");
        assert_eq!(person.full_name(), "Sam Root");
    }
}
