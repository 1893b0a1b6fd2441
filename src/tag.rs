//! Template tag registration and host entry point.
//!
//! The host discovers the tag through [`definition`], renders its
//! argument form from the descriptor, and calls [`run`] with a context
//! exposing its store. The returned string is substituted into the
//! outgoing request.

use std::sync::Arc;

use crate::auth::CognitoAuthManager;
use crate::error::{Error, Result};
use crate::storage::Store;

/// Name under which the tag is registered with the host.
pub const TAG_NAME: &str = "cognitoPasswordToken";

/// Argument descriptor in the host's tag schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagArg {
    /// Label shown in the host's argument form.
    pub display_name: &'static str,
    /// Host-side value type.
    pub arg_type: &'static str,
    /// Whether an empty value fails validation.
    pub required: bool,
}

/// Template tag descriptor: registration name, display metadata, and
/// argument schema.
#[derive(Debug, Clone, Copy)]
pub struct TemplateTag {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub args: &'static [TagArg],
}

const ARGS: &[TagArg] = &[
    TagArg {
        display_name: "Username",
        arg_type: "string",
        required: true,
    },
    TagArg {
        display_name: "Password",
        arg_type: "string",
        required: true,
    },
    TagArg {
        display_name: "UserPoolId",
        arg_type: "string",
        required: true,
    },
    TagArg {
        display_name: "ClientId",
        arg_type: "string",
        required: true,
    },
];

/// The tag this crate registers.
pub fn definition() -> TemplateTag {
    TemplateTag {
        name: TAG_NAME,
        display_name: "Cognito password token",
        description: "Get an access token from AWS Cognito using password-based authentication.",
        args: ARGS,
    }
}

/// Host-provided execution context.
pub struct TagContext {
    /// The host's persistence store.
    pub store: Arc<dyn Store>,
}

impl TagContext {
    /// Create a context around a store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Argument values for one tag invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInput {
    pub username: String,
    pub password: String,
    pub user_pool_id: String,
    pub client_id: String,
}

impl TagInput {
    /// Build from positional values in descriptor order:
    /// Username, Password, UserPoolId, ClientId.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut values = args.iter();
        let mut next = |name: &str| -> Result<String> {
            values
                .next()
                .cloned()
                .ok_or_else(|| Error::MissingArgument(name.into()))
        };
        Ok(Self {
            username: next("Username")?,
            password: next("Password")?,
            user_pool_id: next("UserPoolId")?,
            client_id: next("ClientId")?,
        })
    }

    /// Reject empty required values, mirroring the descriptor's
    /// host-side validation.
    pub fn validate(&self) -> Result<()> {
        for (value, arg) in [
            (&self.username, &ARGS[0]),
            (&self.password, &ARGS[1]),
            (&self.user_pool_id, &ARGS[2]),
            (&self.client_id, &ARGS[3]),
        ] {
            if arg.required && value.is_empty() {
                return Err(Error::MissingArgument(arg.display_name.into()));
            }
        }
        Ok(())
    }
}

/// Tag entry point: produce an access token for the given identity,
/// reusing cached credentials where possible.
pub async fn run(context: &TagContext, input: TagInput) -> Result<String> {
    input.validate()?;

    let manager = CognitoAuthManager::builder()
        .username(input.username)
        .password(input.password)
        .user_pool_id(input.user_pool_id)
        .client_id(input.client_id)
        .store(Arc::clone(&context.store))
        .build()?;

    manager.access_token().await
}
