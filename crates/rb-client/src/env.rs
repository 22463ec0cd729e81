//! Everything the hydration core reads but does not own.

use std::collections::HashSet;

use rb_core::{Connection, LanguagePack, Options, Session, Ui};

use crate::posts::PostRenderer;

pub struct ClientEnv<'a> {
    pub options: &'a Options,
    pub lang: &'a LanguagePack,
    /// Posts the viewer has hidden
    pub hidden: &'a HashSet<u64>,
    /// Posts the viewer authored
    pub mine: &'a HashSet<u64>,
    pub connection: &'a dyn Connection,
    pub ui: &'a dyn Ui,
    pub session: &'a dyn Session,
    pub renderer: &'a dyn PostRenderer,
}
