//! Menu session - the page-level state machine.
//!
//! A session owns the dish store (and through it the rate limiter) from the
//! moment it starts until [`MenuSession::end`]. At most one dialog is open at
//! a time:
//!
//! ```text
//! Idle --open_create--> Creating --submit ok--> Idle
//! Idle --open_edit(id)--> Editing(id) --submit ok--> Idle
//! Idle --open_delete(id)--> ConfirmingDelete(id) --confirm ok--> Idle
//! any --cancel--> Idle
//! ```
//!
//! A failed submit or confirm leaves the dialog open.

use std::fmt;

use uuid::Uuid;

use crate::domain::{Dish, DishInput};
use crate::error::DomainError;
use crate::service::{DishFilter, DishStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Creating,
    Editing(Uuid),
    ConfirmingDelete(Uuid),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Creating => "creating a dish",
            SessionState::Editing(_) => "editing a dish",
            SessionState::ConfirmingDelete(_) => "confirming a delete",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Editing(id) | SessionState::ConfirmingDelete(id) => {
                write!(f, "{} ({})", self.name(), id)
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// Result of a successful form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Created(Dish),
    /// `None` when the dish disappeared while the form was open.
    Updated(Option<Dish>),
}

pub struct MenuSession {
    store: DishStore,
    state: SessionState,
    filter: DishFilter,
}

impl MenuSession {
    pub fn start(store: DishStore) -> Self {
        tracing::debug!("Menu session started");
        Self {
            store,
            state: SessionState::Idle,
            filter: DishFilter::default(),
        }
    }

    /// Close the session, dropping the store and its rate limit windows.
    pub fn end(self) {
        tracing::debug!(state = %self.state, "Menu session ended");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &DishStore {
        &self.store
    }

    pub fn filter(&self) -> &DishFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut DishFilter {
        &mut self.filter
    }

    /// Dishes passing the current search and category filter.
    pub async fn visible_dishes(&self) -> Result<Vec<Dish>, DomainError> {
        Ok(self.filter.apply(self.store.list().await?))
    }

    pub fn open_create(&mut self) -> Result<(), DomainError> {
        self.require_idle("open the create form")?;
        self.state = SessionState::Creating;
        Ok(())
    }

    /// Open the edit form, returning it prefilled from the stored dish.
    pub async fn open_edit(&mut self, id: Uuid) -> Result<DishInput, DomainError> {
        self.require_idle("open the edit form")?;
        let dish = self.existing(id).await?;
        self.state = SessionState::Editing(id);
        Ok(DishInput::from_dish(&dish))
    }

    pub async fn open_delete(&mut self, id: Uuid) -> Result<Dish, DomainError> {
        self.require_idle("open the delete dialog")?;
        let dish = self.existing(id).await?;
        self.state = SessionState::ConfirmingDelete(id);
        Ok(dish)
    }

    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Validate and submit the open create or edit form.
    pub async fn submit(&mut self, input: DishInput) -> Result<Submitted, DomainError> {
        let outcome = match self.state {
            SessionState::Creating => {
                let draft = input.validate()?;
                Submitted::Created(self.store.create(draft).await?)
            }
            SessionState::Editing(id) => {
                let draft = input.validate()?;
                Submitted::Updated(self.store.update(id, draft).await?)
            }
            state => {
                return Err(DomainError::InvalidTransition {
                    action: "submit a dish form",
                    state: state.name(),
                });
            }
        };

        self.state = SessionState::Idle;
        Ok(outcome)
    }

    pub async fn confirm_delete(&mut self) -> Result<Option<Dish>, DomainError> {
        let SessionState::ConfirmingDelete(id) = self.state else {
            return Err(DomainError::InvalidTransition {
                action: "confirm a delete",
                state: self.state.name(),
            });
        };

        let removed = self.store.delete(id).await?;
        self.state = SessionState::Idle;
        Ok(removed)
    }

    fn require_idle(&self, action: &'static str) -> Result<(), DomainError> {
        match self.state {
            SessionState::Idle => Ok(()),
            state => Err(DomainError::InvalidTransition {
                action,
                state: state.name(),
            }),
        }
    }

    async fn existing(&self, id: Uuid) -> Result<Dish, DomainError> {
        self.store
            .find(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Dish",
                id,
            })
    }
}
