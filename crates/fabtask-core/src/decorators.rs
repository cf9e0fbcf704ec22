//! Decorators - task 定義用の便利関数
//!
//! `task` で descriptor を作り、`hosts` / `roles` / `runs_once` で飾る。
//!
//! ```ignore
//! let setup = runs_once(
//!     task(Invocable::callable("setup", |_| Ok(None)))
//!         .decorate(hosts(["user1@host1", "host2"]))
//!         .decorate(roles(["webserver"])),
//! );
//! ```

use crate::typed::{Invocable, TaskDescriptor};

/// Mark an invocable as a task.
///
/// An `Invocable::Task` keeps its `Arc` (no double wrapping).
pub fn task(invocable: Invocable) -> TaskDescriptor {
    TaskDescriptor::new(invocable)
}

/// Decorator that sets the task's host list.
///
/// The list is captured when the decorator is built; applying it replaces
/// whatever list the task had.
pub fn hosts<I, S>(host_list: I) -> impl FnOnce(TaskDescriptor) -> TaskDescriptor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let host_list: Vec<String> = host_list.into_iter().map(Into::into).collect();
    move |mut descriptor| {
        descriptor.set_hosts(host_list);
        descriptor
    }
}

/// Decorator that sets the task's role list.
pub fn roles<I, S>(role_list: I) -> impl FnOnce(TaskDescriptor) -> TaskDescriptor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let role_list: Vec<String> = role_list.into_iter().map(Into::into).collect();
    move |mut descriptor| {
        descriptor.set_roles(role_list);
        descriptor
    }
}

/// Guard the task so it does real work at most once per process.
pub fn runs_once(mut descriptor: TaskDescriptor) -> TaskDescriptor {
    descriptor.set_runs_once();
    descriptor
}

/// In-place form of [`hosts`], returning the same descriptor.
pub fn attach_hosts<I, S>(descriptor: &mut TaskDescriptor, host_list: I) -> &mut TaskDescriptor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    descriptor.set_hosts(host_list)
}

/// In-place form of [`roles`], returning the same descriptor.
pub fn attach_roles<I, S>(descriptor: &mut TaskDescriptor, role_list: I) -> &mut TaskDescriptor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    descriptor.set_roles(role_list)
}
