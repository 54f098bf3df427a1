//! Side-effect ports used by the editors.

use crate::config::{ConfigPurge, ConfigStore, CredentialSink};
use crate::vpn::SessionControl;

pub struct Collaborators {
    pub store: Box<dyn ConfigStore>,
    pub credentials: Box<dyn CredentialSink>,
    pub vpn: Box<dyn SessionControl>,
    pub purge: Box<dyn ConfigPurge>,
}
