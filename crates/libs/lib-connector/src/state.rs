//! Connection state

use shared::Account;

/// Connection state machine
///
/// `Connecting` only exists while an account request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// State owned by the connector.
///
/// `epoch` changes whenever the account is stored or discarded, so a response
/// that outlives its session can be recognised and dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Session {
    pub state: ConnectionState,
    pub account: Option<Account>,
    pub epoch: u64,
}

impl Session {
    /// Account of the current session, only while connected
    pub fn connected_account(&self) -> Option<&Account> {
        match self.state {
            ConnectionState::Connected => self.account.as_ref(),
            _ => None,
        }
    }

    pub fn connect(&mut self, account: Account) {
        self.state = ConnectionState::Connected;
        self.account = Some(account);
        self.epoch += 1;
    }

    pub fn disconnect(&mut self) {
        self.state = ConnectionState::Disconnected;
        self.account = None;
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            account_id: "0.0.4815".to_string(),
            network: "testnet".to_string(),
        }
    }

    #[test]
    fn test_connected_account_requires_connected_state() {
        let mut session = Session {
            state: ConnectionState::Connecting,
            account: Some(account()),
            epoch: 0,
        };
        assert!(session.connected_account().is_none());

        session.connect(account());
        assert_eq!(session.connected_account(), Some(&account()));
    }

    #[test]
    fn test_epoch_advances_on_transitions() {
        let mut session = Session::default();
        session.connect(account());
        session.disconnect();
        assert_eq!(session.epoch, 2);
        assert_eq!(session.state, ConnectionState::Disconnected);
        assert!(session.account.is_none());
    }
}
