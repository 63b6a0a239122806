//! Domain entity representing a student.

/// A stored student record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Student {
    /// Creates a new Student instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let student = Student::new(1, "Alice".to_string(), "a@x.com".to_string());
    /// ```
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// Copies `name` and `email` from `changes`, leaving `id` untouched.
    pub fn apply(&mut self, changes: StudentChanges) {
        self.name = changes.name;
        self.email = changes.email;
    }
}

/// Input data for creating a new student. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Fields replaced on an existing student by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: String,
    pub email: String,
}

/// Argument of an insert-or-update save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStudent {
    /// Insert a new row; the store assigns the id.
    New(NewStudent),
    /// Overwrite the row identified by `Student::id`.
    Existing(Student),
}

impl From<NewStudent> for SaveStudent {
    fn from(student: NewStudent) -> Self {
        Self::New(student)
    }
}

impl From<Student> for SaveStudent {
    fn from(student: Student) -> Self {
        Self::Existing(student)
    }
}
