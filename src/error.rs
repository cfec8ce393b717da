use thiserror::Error;

/// Rejected generation input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("subject pool is empty; at least one subject/faculty pair is required")]
    EmptySubjectPool,

    #[error("room pool is empty; at least one room is required")]
    EmptyRoomPool,

    #[error("{requested} classes per day requested; at most {max} are allowed")]
    TooManyClasses { requested: usize, max: usize },

    #[error("{requested} rooms requested; at most {max} are allowed")]
    TooManyRooms { requested: usize, max: usize },

    #[error("grid of {requested} slots requested; at most {max} are allowed")]
    TooManySlots { requested: usize, max: usize },
}
