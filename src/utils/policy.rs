use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(String),
}

impl Decision {
    /// Convert a deny into the error it surfaces as, for `?` at call sites.
    pub fn require(self) -> Result<(), crate::types::error::AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(crate::types::error::AppError::Forbidden(reason)),
        }
    }
}

/// Ownership rule for user records: you are the only one who may look at,
/// edit, or remove your own row. No I/O, no panics.
pub fn can(action: Action, actor_id: Uuid, target_id: Uuid) -> Decision {
    if actor_id == target_id {
        return Decision::Allow;
    }

    let reason = match action {
        Action::View => "You can not view this user.",
        Action::Update => "You can not edit this user.",
        Action::Delete => "You can not delete this user.",
    };
    Decision::Deny(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_allowed_everything() {
        let id = Uuid::new_v4();
        assert_eq!(can(Action::View, id, id), Decision::Allow);
        assert_eq!(can(Action::Update, id, id), Decision::Allow);
        assert_eq!(can(Action::Delete, id, id), Decision::Allow);
    }

    #[test]
    fn stranger_is_denied_with_a_reason() {
        let actor = Uuid::new_v4();
        let target = Uuid::new_v4();
        for action in [Action::View, Action::Update, Action::Delete] {
            match can(action, actor, target) {
                Decision::Deny(reason) => assert!(reason.contains("You can not")),
                Decision::Allow => panic!("{:?} should be denied for a stranger", action),
            }
        }
    }

    #[test]
    fn deny_maps_to_forbidden() {
        let err = can(Action::View, Uuid::new_v4(), Uuid::new_v4())
            .require()
            .unwrap_err();
        assert!(matches!(
            err,
            crate::types::error::AppError::Forbidden(_)
        ));
    }
}
