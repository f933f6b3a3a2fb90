//! Shared test fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use moments::{
    Comment, CommentPayload, Moment, MomentGateway, MomentId, MomentPayload, TransportError,
};

/// A gateway call as the fake API received it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(MomentPayload),
    Update(MomentId, MomentPayload),
    Delete(MomentId),
    Comment(MomentId, CommentPayload),
}

/// In-memory stand-in for the Moments API that records every call
pub struct FakeApi {
    moments: RefCell<Vec<Moment>>,
    next_id: Cell<u64>,
    calls: RefCell<Vec<Call>>,
    /// New moments go to the front instead of the back
    pub newest_first: Cell<bool>,
    pub fail_list: Cell<bool>,
    pub fail_mutations: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::with_moments(Vec::new())
    }

    pub fn with_moments(moments: Vec<Moment>) -> Self {
        let next_id = moments.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            moments: RefCell::new(moments),
            next_id: Cell::new(next_id),
            calls: RefCell::new(Vec::new()),
            newest_first: Cell::new(false),
            fail_list: Cell::new(false),
            fail_mutations: Cell::new(false),
        }
    }

    /// Force the id the next created moment or comment receives
    pub fn set_next_id(&self, id: u64) {
        self.next_id.set(id);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn server_moments(&self) -> Vec<Moment> {
        self.moments.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn check_mutation(&self) -> Result<(), TransportError> {
        if self.fail_mutations.get() {
            Err(TransportError::Status {
                status: 500,
                body: "internal error".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl MomentGateway for FakeApi {
    async fn list_moments(&self) -> Result<Vec<Moment>, TransportError> {
        self.record(Call::List);
        if self.fail_list.get() {
            return Err(TransportError::Request("connection refused".to_string()));
        }
        Ok(self.server_moments())
    }

    async fn create_moment(&self, data: &MomentPayload) -> Result<Moment, TransportError> {
        self.record(Call::Create(data.clone()));
        self.check_mutation()?;

        let id = self.allocate_id();
        let mut moment = data.clone().into_moment(id);
        moment.created_at = format!("t{}", id);
        moment.updated_at = format!("t{}", id);

        let mut moments = self.moments.borrow_mut();
        if self.newest_first.get() {
            moments.insert(0, moment.clone());
        } else {
            moments.push(moment.clone());
        }
        Ok(moment)
    }

    async fn update_moment(
        &self,
        id: MomentId,
        data: &MomentPayload,
    ) -> Result<Moment, TransportError> {
        self.record(Call::Update(id, data.clone()));
        self.check_mutation()?;

        let mut moment = data.clone().into_moment(id);
        moment.updated_at = "updated".to_string();

        let mut moments = self.moments.borrow_mut();
        for existing in moments.iter_mut().filter(|m| m.id == id) {
            *existing = moment.clone();
        }
        Ok(moment)
    }

    async fn delete_moment(&self, id: MomentId) -> Result<(), TransportError> {
        self.record(Call::Delete(id));
        self.check_mutation()?;

        self.moments.borrow_mut().retain(|m| m.id != id);
        Ok(())
    }

    async fn create_comment(
        &self,
        moment_id: MomentId,
        data: &CommentPayload,
    ) -> Result<(), TransportError> {
        self.record(Call::Comment(moment_id, data.clone()));
        self.check_mutation()?;

        let comment: Comment = data.clone().into_comment(self.allocate_id());
        if let Some(moment) = self
            .moments
            .borrow_mut()
            .iter_mut()
            .find(|m| m.id == moment_id)
        {
            moment.comments.push(comment);
        }
        Ok(())
    }
}

pub fn moment(id: MomentId, title: &str) -> Moment {
    Moment {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        created_at: format!("t{}", id),
        updated_at: format!("t{}", id),
        ..Default::default()
    }
}
