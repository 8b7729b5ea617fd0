use super::*;

/// Tests the first request from an unknown agent.
///
/// Verifies the agent is registered under the header name and the daily login pack
/// is reported.
///
/// Expected: Ok with the new agent and a daily_login notice
#[tokio::test]
async fn registers_new_agent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers(&[(AGENT_ID_HEADER, "mb_new"), (AGENT_NAME_HEADER, "Newbie")]);

    let caller = AgentGuard::new(db, &headers).require().await?;

    assert_eq!(caller.agent.moltbook_id, "mb_new");
    assert_eq!(caller.agent.name, "Newbie");
    assert!(caller.daily_login.is_some_and(|login| login.pack_given));

    let again = AgentGuard::new(db, &headers).require().await?;
    assert_eq!(again.agent.id, caller.agent.id);
    assert!(again.daily_login.is_none());

    Ok(())
}

/// Tests a request without a name header.
///
/// Expected: the Moltbook ID is used as the name
#[tokio::test]
async fn defaults_name_to_moltbook_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers(&[(AGENT_ID_HEADER, "mb_anon")]);

    let caller = AgentGuard::new(db, &headers).require().await?;

    assert_eq!(caller.agent.name, "mb_anon");

    Ok(())
}

/// Tests a request without identity.
///
/// Expected: Err(AuthErr(MissingAgentIdentity)) for a missing and for a blank header
#[tokio::test]
async fn rejects_missing_identity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let missing = HeaderMap::new();
    let result = AgentGuard::new(db, &missing).require().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAgentIdentity))
    ));

    let blank = headers(&[(AGENT_ID_HEADER, "  ")]);
    let result = AgentGuard::new(db, &blank).require().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAgentIdentity))
    ));

    Ok(())
}

/// Tests an existing agent that already logged in today.
///
/// Expected: same agent, no daily_login notice
#[tokio::test]
async fn existing_agent_logged_in_today() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .last_login_date(Some(chrono::Utc::now().date_naive()))
        .build()
        .await?;
    let headers = headers(&[(AGENT_ID_HEADER, agent.moltbook_id.as_str())]);

    let caller = AgentGuard::new(db, &headers).require().await?;

    assert_eq!(caller.agent.id, agent.id);
    assert_eq!(caller.agent.name, agent.name);
    assert!(caller.daily_login.is_none());

    Ok(())
}
