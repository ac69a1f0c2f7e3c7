use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

use crate::application::TaskBoard;
use crate::message::{Command, Message};
use crate::sync::TaskStore;

/// Performs [`Command`]s against a [`TaskStore`] and hands back their results.
///
/// Calls run concurrently and complete in whatever order the backend answers;
/// nothing here serializes them. There is no timeout, so a call that never
/// resolves simply stays in flight.
pub struct Runtime<S> {
    store: S,
    in_flight: FuturesUnordered<BoxFuture<'static, Message>>,
}

impl<S> Runtime<S>
where
    S: TaskStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            in_flight: FuturesUnordered::new(),
        }
    }

    pub fn spawn(&mut self, command: Command) {
        let store = self.store.clone();
        let fut = match command {
            Command::None => return,
            Command::Load => async move { Message::Loaded(store.list().await) }.boxed(),
            Command::Create {
                description,
                priority,
            } => async move { Message::Created(store.create(&description).await, priority) }.boxed(),
            Command::Delete(id) => async move { Message::Deleted(store.delete(id).await) }.boxed(),
        };
        self.in_flight.push(fut);
    }

    /// Apply a message to the board and start whatever call it asks for.
    pub fn dispatch(&mut self, board: &mut TaskBoard, message: Message) {
        let command = board.update(message);
        self.spawn(command);
    }

    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Next call to resolve, or `None` when nothing is in flight.
    pub async fn next(&mut self) -> Option<Message> {
        self.in_flight.next().await
    }

    /// Feed every resolution back into the board until nothing is in flight.
    pub async fn settle(&mut self, board: &mut TaskBoard) {
        while let Some(message) = self.next().await {
            self.dispatch(board, message);
        }
    }
}
