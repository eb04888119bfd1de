use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::DbConnection;
use crate::domain::audit::{Auditable, Clock};
use crate::domain::product::Product;
use crate::repository::audit::AuditInterceptor;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Tracking state of an entity inside a [`UnitOfWork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    /// Matches the stored row.
    Unchanged,
    /// Will be inserted on the next commit.
    Added,
    /// Will be updated on the next commit.
    Modified,
    /// Will be deleted on the next commit.
    Deleted,
    /// No longer tracked; ignored by commits.
    Detached,
}

impl EntityState {
    /// Whether the next commit writes anything for this state.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            EntityState::Added | EntityState::Modified | EntityState::Deleted
        )
    }

    fn after_commit(self) -> Self {
        match self {
            EntityState::Added | EntityState::Modified => EntityState::Unchanged,
            EntityState::Deleted => EntityState::Detached,
            other => other,
        }
    }
}

/// Downcasting support for boxed entities.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Copy of an entity's values, used to detect in-memory changes.
pub trait Snapshot {
    fn snapshot(&self) -> Box<dyn Any + Send>;
    fn differs_from(&self, snapshot: &dyn Any) -> bool;
}

impl<T: Any + Clone + PartialEq + Send> Snapshot for T {
    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }

    fn differs_from(&self, snapshot: &dyn Any) -> bool {
        snapshot
            .downcast_ref::<T>()
            .is_none_or(|original| original != self)
    }
}

/// A type the unit of work can track and flush.
///
/// Join entities are identified by their key columns, so changing those
/// fields on a tracked join row is not persisted; remove it and add a new one.
pub trait Entity: AsAny + Snapshot + Send {
    /// Exposes the audit capability when the entity carries timestamps.
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        None
    }

    /// Insert the entity, refreshing it from the stored row.
    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()>;

    /// Write the entity's current values over its stored row.
    ///
    /// Returns `false` when the entity has no columns to update.
    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool>;

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()>;
}

/// Entities that can be loaded into a unit of work by key.
pub trait Findable: Entity + Sized {
    type Key: PartialEq;

    /// Key of the row this entity maps to.
    fn key(&self) -> Self::Key;

    fn find(conn: &mut SqliteConnection, key: &Self::Key) -> RepositoryResult<Option<Self>>;
}

/// Join row linking a product to one other entity.
pub trait Association: Entity + Sized {
    type Linked: Findable<Key = i32>;

    fn from_ids(product_id: i32, linked_id: i32) -> Self;

    fn set_product_id(&mut self, id: i32);

    fn set_linked_id(&mut self, id: i32);
}

/// Parent side of an association: a stored row id or an entry tracked in the
/// same unit of work.
pub enum ParentRef<E> {
    Id(i32),
    Entry(EntryKey<E>),
}

impl<E> From<i32> for ParentRef<E> {
    fn from(id: i32) -> Self {
        ParentRef::Id(id)
    }
}

impl<E> From<EntryKey<E>> for ParentRef<E> {
    fn from(key: EntryKey<E>) -> Self {
        ParentRef::Entry(key)
    }
}

/// Copies a tracked parent's id into a join row right before it is inserted.
struct ParentLink {
    parent: usize,
    read_id: fn(&dyn Entity) -> Option<i32>,
    write_id: fn(&mut dyn Entity, i32),
}

fn tracked_id<P: Findable<Key = i32>>(entity: &dyn Entity) -> Option<i32> {
    entity.as_any().downcast_ref::<P>().map(|parent| parent.key())
}

fn assign_product_id<A: Association>(entity: &mut dyn Entity, id: i32) {
    if let Some(row) = entity.as_any_mut().downcast_mut::<A>() {
        row.set_product_id(id);
    }
}

fn assign_linked_id<A: Association>(entity: &mut dyn Entity, id: i32) {
    if let Some(row) = entity.as_any_mut().downcast_mut::<A>() {
        row.set_linked_id(id);
    }
}

pub(crate) struct TrackedEntry {
    pub(crate) state: EntityState,
    pub(crate) entity: Box<dyn Entity>,
    original: Option<Box<dyn Any + Send>>,
    parents: Vec<ParentLink>,
}

impl TrackedEntry {
    pub(crate) fn new(state: EntityState, entity: Box<dyn Entity>) -> Self {
        let mut entry = Self {
            state,
            entity,
            original: None,
            parents: Vec::new(),
        };
        if state == EntityState::Unchanged {
            entry.take_snapshot();
        }
        entry
    }

    fn take_snapshot(&mut self) {
        let entity: &dyn Entity = &*self.entity;
        self.original = Some(entity.snapshot());
    }

    /// State including in-memory edits made to an unchanged entity.
    fn current_state(&self) -> EntityState {
        match (self.state, &self.original) {
            (EntityState::Unchanged, Some(original)) => {
                let entity: &dyn Entity = &*self.entity;
                if entity.differs_from(&**original) {
                    EntityState::Modified
                } else {
                    EntityState::Unchanged
                }
            }
            (state, _) => state,
        }
    }

    fn downcast_ref<E: Entity>(&self) -> Option<&E> {
        let entity: &dyn Entity = &*self.entity;
        entity.as_any().downcast_ref::<E>()
    }

    fn downcast_mut<E: Entity>(&mut self) -> Option<&mut E> {
        let entity: &mut dyn Entity = &mut *self.entity;
        entity.as_any_mut().downcast_mut::<E>()
    }
}

/// Typed handle to an entity tracked by a [`UnitOfWork`].
pub struct EntryKey<E> {
    index: usize,
    marker: PhantomData<fn() -> E>,
}

impl<E> EntryKey<E> {
    fn new(index: usize) -> Self {
        Self {
            index,
            marker: PhantomData,
        }
    }
}

impl<E> Clone for EntryKey<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EntryKey<E> {}

impl<E> fmt::Debug for EntryKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryKey").field(&self.index).finish()
    }
}

/// Change-tracking session bound to one pooled connection.
///
/// Entities are registered with [`add`](Self::add), [`attach`](Self::attach)
/// or [`find`](Self::find), mutated in memory, then flushed by
/// [`commit`](Self::commit) inside a single transaction. Every commit first
/// runs the [`AuditInterceptor`].
///
/// A failed commit leaves the audit stamps and entry states in memory as they
/// were; discard the unit of work instead of committing it again.
pub struct UnitOfWork {
    conn: DbConnection,
    interceptor: AuditInterceptor,
    entries: Vec<TrackedEntry>,
}

impl UnitOfWork {
    pub fn new(conn: DbConnection, clock: Arc<dyn Clock>) -> Self {
        Self {
            conn,
            interceptor: AuditInterceptor::new(clock),
            entries: Vec::new(),
        }
    }

    fn track<E: Entity>(&mut self, entity: E, state: EntityState) -> EntryKey<E> {
        self.entries.push(TrackedEntry::new(state, Box::new(entity)));
        EntryKey::new(self.entries.len() - 1)
    }

    /// Track a new entity to be inserted on the next commit.
    pub fn add<E: Entity>(&mut self, entity: E) -> EntryKey<E> {
        self.track(entity, EntityState::Added)
    }

    /// Track an entity that already matches its stored row.
    pub fn attach<E: Entity>(&mut self, entity: E) -> EntryKey<E> {
        self.track(entity, EntityState::Unchanged)
    }

    /// Track a new join row between a product and a linked entity.
    ///
    /// Parents given as entry keys may be added in the same unit of work;
    /// their generated ids are copied into the row when it is inserted.
    pub fn link<A: Association>(
        &mut self,
        product: impl Into<ParentRef<Product>>,
        linked: impl Into<ParentRef<A::Linked>>,
    ) -> EntryKey<A> {
        let mut row = A::from_ids(0, 0);
        let mut parents = Vec::new();

        match product.into() {
            ParentRef::Id(id) => row.set_product_id(id),
            ParentRef::Entry(key) => parents.push(ParentLink {
                parent: key.index,
                read_id: tracked_id::<Product>,
                write_id: assign_product_id::<A>,
            }),
        }
        match linked.into() {
            ParentRef::Id(id) => row.set_linked_id(id),
            ParentRef::Entry(key) => parents.push(ParentLink {
                parent: key.index,
                read_id: tracked_id::<A::Linked>,
                write_id: assign_linked_id::<A>,
            }),
        }

        let key = self.add(row);
        self.entries[key.index].parents = parents;
        key
    }

    /// Load an entity by key and attach it as unchanged.
    ///
    /// An entity already tracked under the same key is returned instead of
    /// loading a second copy. One scheduled for deletion reads as `None`.
    pub fn find<E: Findable>(&mut self, key: &E::Key) -> RepositoryResult<Option<EntryKey<E>>> {
        let tracked = self.entries.iter().position(|entry| {
            entry.state != EntityState::Detached
                && entry
                    .downcast_ref::<E>()
                    .is_some_and(|entity| entity.key() == *key)
        });
        if let Some(index) = tracked {
            if self.entries[index].state == EntityState::Deleted {
                return Ok(None);
            }
            return Ok(Some(EntryKey::new(index)));
        }

        let loaded = E::find(&mut self.conn, key)?;
        Ok(loaded.map(|entity| self.attach(entity)))
    }

    pub fn get<E: Entity>(&self, key: EntryKey<E>) -> Option<&E> {
        let entry = self.entries.get(key.index)?;
        if entry.state == EntityState::Detached {
            return None;
        }
        entry.downcast_ref::<E>()
    }

    /// Mutable access to a tracked entity.
    ///
    /// An unchanged entity reads as modified only once its values differ from
    /// the ones it was loaded or last committed with.
    pub fn get_mut<E: Entity>(&mut self, key: EntryKey<E>) -> Option<&mut E> {
        let entry = self.entries.get_mut(key.index)?;
        if entry.state == EntityState::Detached {
            return None;
        }
        entry.downcast_mut::<E>()
    }

    /// Flag an unchanged entity for update without touching its fields.
    pub fn mark_modified<E: Entity>(&mut self, key: EntryKey<E>) -> RepositoryResult<()> {
        let entry = self
            .entries
            .get_mut(key.index)
            .ok_or(RepositoryError::NotFound)?;

        match entry.current_state() {
            EntityState::Unchanged => entry.state = EntityState::Modified,
            EntityState::Added | EntityState::Modified => {}
            EntityState::Deleted | EntityState::Detached => return Err(RepositoryError::NotFound),
        }

        Ok(())
    }

    /// Schedule deletion. Entities never committed are simply detached.
    pub fn remove<E: Entity>(&mut self, key: EntryKey<E>) -> RepositoryResult<()> {
        let entry = self
            .entries
            .get_mut(key.index)
            .ok_or(RepositoryError::NotFound)?;

        entry.state = match entry.current_state() {
            EntityState::Added => EntityState::Detached,
            EntityState::Unchanged | EntityState::Modified => EntityState::Deleted,
            EntityState::Deleted => EntityState::Deleted,
            EntityState::Detached => return Err(RepositoryError::NotFound),
        };

        Ok(())
    }

    pub fn state<E: Entity>(&self, key: EntryKey<E>) -> Option<EntityState> {
        self.entries.get(key.index).map(TrackedEntry::current_state)
    }

    /// Whether the next commit would write anything.
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.current_state().is_pending())
    }

    /// Stamp auditable entities, then flush every pending entry in one transaction.
    ///
    /// Returns the number of rows inserted, updated or deleted.
    pub fn commit(&mut self) -> RepositoryResult<usize> {
        for entry in self.entries.iter_mut() {
            entry.state = entry.current_state();
        }

        let stamped = self.interceptor.before_commit(&mut self.entries);

        let entries = &mut self.entries;
        let result = self
            .conn
            .transaction::<usize, RepositoryError, _>(|conn| flush(conn, entries));

        let written = match result {
            Ok(written) => written,
            Err(err) => {
                log::warn!("Commit failed after stamping {stamped} entities: {err}");
                return Err(err);
            }
        };

        for entry in self.entries.iter_mut() {
            entry.state = entry.state.after_commit();
            entry.parents.clear();
            if entry.state == EntityState::Unchanged {
                entry.take_snapshot();
            } else {
                entry.original = None;
            }
        }

        log::debug!("Committed {written} entries ({stamped} audit stamps)");
        Ok(written)
    }

    /// Discard all tracked changes without touching the database.
    pub fn rollback(self) {
        let pending = self
            .entries
            .iter()
            .filter(|entry| entry.current_state().is_pending())
            .count();
        log::debug!("Discarding unit of work with {pending} pending entries");
    }
}

fn flush(conn: &mut SqliteConnection, entries: &mut [TrackedEntry]) -> RepositoryResult<usize> {
    let mut written = 0;

    for index in 0..entries.len() {
        let (earlier, rest) = entries.split_at_mut(index);
        let entry = &mut rest[0];

        let wrote = match entry.state {
            EntityState::Added => {
                resolve_parents(earlier, entry)?;
                entry.entity.insert(conn)?;
                true
            }
            EntityState::Modified => entry.entity.update(conn)?,
            EntityState::Deleted => {
                entry.entity.delete(conn)?;
                true
            }
            EntityState::Unchanged | EntityState::Detached => false,
        };
        if wrote {
            written += 1;
        }
    }

    Ok(written)
}

/// Parents are always tracked before the rows linking to them, so their
/// inserts have already written back their ids.
fn resolve_parents(earlier: &[TrackedEntry], entry: &mut TrackedEntry) -> RepositoryResult<()> {
    for link in &entry.parents {
        let id = earlier
            .get(link.parent)
            .filter(|parent| !matches!(parent.state, EntityState::Deleted | EntityState::Detached))
            .and_then(|parent| (link.read_id)(&*parent.entity))
            .filter(|id| *id != 0)
            .ok_or_else(|| {
                RepositoryError::ConstraintViolation("linked entry has no stored row".to_string())
            })?;
        (link.write_id)(&mut *entry.entity, id);
    }

    Ok(())
}
