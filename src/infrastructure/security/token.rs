// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, PublicKey,
    builder::{Algorithm, AuthorizerBuilder},
};

/// Verifies Biscuit tokens minted by the host application with its root key.
#[derive(Clone)]
pub struct BiscuitTokenVerifier {
    public: PublicKey,
}

impl BiscuitTokenVerifier {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { public })
    }

    pub fn from_public_key(public: PublicKey) -> Self {
        Self { public }
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Token caveats (expiry checks) are enforced against the current time.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        crate::infrastructure::security::claims::parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biscuit_auth::{KeyPair, builder::Term};
    use std::collections::HashMap;
    use std::time::{Duration, SystemTime};

    fn mint(root: &KeyPair, rights: &[(&str, &str)], ttl: Duration) -> String {
        let issued = SystemTime::now() - Duration::from_secs(5);
        let expires = issued + ttl;

        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".into(), 42i64.into());
        params.insert("uname".into(), "auditor".to_string().into());
        params.insert("issued".into(), issued.into());
        params.insert("exp".into(), expires.into());

        let mut code = String::from(
            r#"
            user({uid}, {uname});
            issued_at({issued});
            expires_at({exp});
            check if time($now), $now <= {exp};
            "#,
        );
        for (resource, action) in rights {
            code.push_str(&format!("right(\"{resource}\", \"{action}\");\n"));
        }

        Biscuit::builder()
            .code_with_params(&code, params, HashMap::new())
            .unwrap()
            .build(root)
            .unwrap()
            .to_base64()
            .unwrap()
    }

    #[tokio::test]
    async fn verifies_token_and_reads_rights() {
        let root = KeyPair::new();
        let verifier = BiscuitTokenVerifier::from_public_key(root.public());
        let token = mint(&root, &[("users", "activity")], Duration::from_secs(3600));

        let user = verifier.authenticate(&token).await.unwrap();
        assert_eq!(i64::from(user.id), 42);
        assert_eq!(user.username, "auditor");
        assert!(user.has_capability("users", "activity"));
        assert!(!user.has_capability("activity", "publish"));
    }

    #[tokio::test]
    async fn rejects_token_signed_by_another_key() {
        let root = KeyPair::new();
        let other = KeyPair::new();
        let verifier = BiscuitTokenVerifier::from_public_key(other.public());
        let token = mint(&root, &[], Duration::from_secs(3600));

        let err = verifier.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let root = KeyPair::new();
        let verifier = BiscuitTokenVerifier::from_public_key(root.public());
        assert!(verifier.authenticate("not-a-token").await.is_err());
    }
}
