use kubedeploy_build::{
    ContainerLifecycle, FixedDelay, Pipeline, PipelineError, PipelineOutcome, ReadinessWait,
    TestDispatcher,
};
use kubedeploy_core::{ExecutionMode, RepoConfig, RunOptions, TestCommand, TestSet};
use kubedeploy_docker::{
    CommandExecutor, CommandResult, ContainerHandle, DockerClient, DockerConfigFile, ExecError,
};
use mockall::mock;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

mock! {
    Executor {}

    impl CommandExecutor for Executor {
        async fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError>;
        async fn run_streaming(&self, program: &str, args: &[String]) -> Result<i32, ExecError>;
        async fn run_capturing(
            &self,
            program: &str,
            args: &[String],
        ) -> Result<CommandResult, ExecError>;
    }
}

// ── Harness ──

type Script = Arc<dyn Fn(&str) -> CommandResult + Send + Sync>;

/// Every command line the pipeline issued, in order.
#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn count(&self, line: &str) -> usize {
        self.calls().iter().filter(|c| *c == line).count()
    }

    fn any_starts_with(&self, prefix: &str) -> bool {
        self.calls().iter().any(|c| c.starts_with(prefix))
    }
}

/// A mock executor that records every call and answers from `script`,
/// which sees the full command line.
fn scripted(log: &CallLog, script: impl Fn(&str) -> CommandResult + Send + Sync + 'static) -> MockExecutor {
    let script: Script = Arc::new(script);
    let mut mock = MockExecutor::new();

    let (l, s) = (log.clone(), script.clone());
    mock.expect_run().returning(move |program, args| {
        let line = record(&l, program, args);
        Ok(s(&line).exit_code)
    });
    let (l, s) = (log.clone(), script.clone());
    mock.expect_run_streaming().returning(move |program, args| {
        let line = record(&l, program, args);
        Ok(s(&line).exit_code)
    });
    let (l, s) = (log.clone(), script);
    mock.expect_run_capturing().returning(move |program, args| {
        let line = record(&l, program, args);
        Ok(s(&line))
    });
    mock
}

fn record(log: &CallLog, program: &str, args: &[String]) -> String {
    let mut line = program.to_owned();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    log.0.lock().unwrap().push(line.clone());
    line
}

fn ok() -> CommandResult {
    CommandResult::default()
}

fn exit(code: i32) -> CommandResult {
    CommandResult {
        exit_code: code,
        stdout: String::new(),
    }
}

/// Containers start as `c123`; everything else succeeds.
fn happy(line: &str) -> CommandResult {
    if line.starts_with("docker run -d") {
        CommandResult {
            exit_code: 0,
            stdout: "c123\n".to_owned(),
        }
    } else {
        ok()
    }
}

fn set(name: &str, mode: ExecutionMode, commands: &[TestCommand]) -> TestSet {
    TestSet {
        name: name.to_owned(),
        mode,
        docker_args: vec!["-d".to_owned()],
        docker_command: Vec::new(),
        commands: commands.to_vec(),
    }
}

fn repo(cluster: &str, tests: Vec<TestSet>) -> RepoConfig {
    RepoConfig {
        app_name: "api".to_owned(),
        cluster_name: cluster.to_owned(),
        registry_root: "eu.gcr.io/proj".to_owned(),
        image_name: "api:main-1a2b".to_owned(),
        image_full_path: "eu.gcr.io/proj/api:main-1a2b".to_owned(),
        release_name: "api-main".to_owned(),
        pwd: PathBuf::from("/src/api"),
        aux_test_image: "mycujoo/gcloud-docker".to_owned(),
        startup_grace: Duration::ZERO,
        command_grace: Duration::ZERO,
        tests,
    }
}

fn logged_in() -> DockerConfigFile {
    serde_json::from_str(r#"{"auths": {"eu.gcr.io": {"auth": "dXNlcjpwYXNz"}}}"#).unwrap()
}

fn pipeline(mock: MockExecutor, repo: RepoConfig, options: RunOptions) -> Pipeline<MockExecutor> {
    Pipeline::new(DockerClient::with_executor(mock), repo, options).with_credentials(logged_in())
}

/// Counts readiness waits instead of sleeping.
#[derive(Default)]
struct CountingWait {
    started: AtomicUsize,
    commands: AtomicUsize,
}

impl ReadinessWait for CountingWait {
    async fn container_started(&self) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    async fn before_command(&self) {
        self.commands.fetch_add(1, Ordering::SeqCst);
    }
}

fn curl_health() -> TestCommand {
    TestCommand::new("curl", ["-f", "http://localhost/health"])
}

// ── Execution modes ──

#[tokio::test]
async fn on_host_runs_program_directly() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("smoke", ExecutionMode::OnHost, &[TestCommand::new("echo", ["hi"])])],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "docker run -d api:main-1a2b",
            "echo hi",
            "docker stop c123",
            "docker rm c123",
        ]
    );
    assert!(!log.any_starts_with("docker exec"));
    assert!(!log.any_starts_with("docker run --rm"));
}

#[tokio::test]
async fn host_only_never_starts_a_container() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set(
            "env",
            ExecutionMode::HostOnly,
            &[TestCommand::new("echo", ["hi"]), TestCommand::new("docker", ["version"])],
        )],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(log.calls(), vec!["echo hi", "docker version"]);
}

#[tokio::test]
async fn in_test_container_execs_into_handle() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set(
            "unit",
            ExecutionMode::InTestContainer,
            &[TestCommand::new("npm", ["test"])],
        )],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(log.count("docker exec c123 npm test"), 1);
}

#[tokio::test]
async fn in_external_container_shares_network() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set(
            "api",
            ExecutionMode::InExternalContainer { declared: true },
            &[curl_health()],
        )],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(
        log.count(
            "docker run --rm --network container:c123 mycujoo/gcloud-docker curl -f http://localhost/health"
        ),
        1
    );
}

#[tokio::test]
async fn undeclared_mode_behaves_like_external() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set(
            "api",
            ExecutionMode::InExternalContainer { declared: false },
            &[curl_health()],
        )],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert!(log.any_starts_with("docker run --rm --network container:c123 mycujoo/gcloud-docker curl"));
}

#[tokio::test]
async fn docker_args_and_command_surround_image() {
    let log = CallLog::default();
    let mut api = set("api", ExecutionMode::InTestContainer, &[]);
    api.docker_args = vec!["-d".to_owned(), "-p".to_owned(), "8080:8080".to_owned()];
    api.docker_command = vec!["serve".to_owned(), "--verbose".to_owned()];
    let pipeline = pipeline(scripted(&log, happy), repo("staging", vec![api]), RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(log.calls()[0], "docker run -d -p 8080:8080 api:main-1a2b serve --verbose");
}

// ── Fail-fast and teardown ──

#[tokio::test]
async fn failing_external_command_tears_down_and_fails() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![
            set(
                "api",
                ExecutionMode::InExternalContainer { declared: true },
                &[curl_health(), TestCommand::new("echo", ["never"])],
            ),
            set("later", ExecutionMode::HostOnly, &[TestCommand::new("echo", ["later"])]),
        ],
    );
    let mock = scripted(&log, |line| {
        if line.starts_with("docker run --rm") {
            exit(22)
        } else {
            happy(line)
        }
    });
    let pipeline = pipeline(mock, repo, RunOptions::default());

    let err = pipeline.run_tests().await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::TestFailed { ref test_set, ref command, exit_code: 22 }
            if test_set == "api" && command == "curl -f http://localhost/health"
    ));
    assert_eq!(
        log.calls(),
        vec![
            "docker run -d api:main-1a2b",
            "docker run --rm --network container:c123 mycujoo/gcloud-docker curl -f http://localhost/health",
            "docker stop c123",
            "docker rm c123",
        ]
    );
}

#[tokio::test]
async fn failure_mid_set_skips_remaining_commands_and_tears_down_once() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set(
            "unit",
            ExecutionMode::InTestContainer,
            &[
                TestCommand::new("true", Vec::<String>::new()),
                TestCommand::new("false", Vec::<String>::new()),
                TestCommand::new("echo", ["unreachable"]),
            ],
        )],
    );
    let mock = scripted(&log, |line| {
        if line == "docker exec c123 false" {
            exit(1)
        } else {
            happy(line)
        }
    });
    let pipeline = pipeline(mock, repo, RunOptions::default());

    assert!(pipeline.run_tests().await.is_err());

    assert_eq!(log.count("docker exec c123 true"), 1);
    assert_eq!(log.count("docker exec c123 false"), 1);
    assert!(!log.any_starts_with("docker exec c123 echo"));
    assert_eq!(log.count("docker stop c123"), 1);
    assert_eq!(log.count("docker rm c123"), 1);
}

#[tokio::test]
async fn keep_test_container_stops_without_removing() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("unit", ExecutionMode::InTestContainer, &[TestCommand::new("false", Vec::<String>::new())])],
    );
    let mock = scripted(&log, |line| {
        if line.starts_with("docker exec") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let options = RunOptions {
        keep_test_container: true,
        ..RunOptions::default()
    };
    let pipeline = pipeline(mock, repo, options);

    assert!(pipeline.run_tests().await.is_err());

    assert_eq!(log.count("docker stop c123"), 1);
    assert!(!log.any_starts_with("docker rm"));
}

#[tokio::test]
async fn container_start_failure_tears_down_captured_handle() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("api", ExecutionMode::InTestContainer, &[TestCommand::new("npm", ["test"])])],
    );
    let mock = scripted(&log, |line| {
        if line.starts_with("docker run -d") {
            CommandResult {
                exit_code: 125,
                stdout: "deadbeef\n".to_owned(),
            }
        } else {
            ok()
        }
    });
    let pipeline = pipeline(mock, repo, RunOptions::default());

    let err = pipeline.run_tests().await.unwrap_err();

    assert!(matches!(err, PipelineError::ContainerStart { exit_code: 125, .. }));
    assert_eq!(
        log.calls(),
        vec!["docker run -d api:main-1a2b", "docker stop deadbeef", "docker rm deadbeef"]
    );
}

#[tokio::test]
async fn container_start_failure_without_output_skips_teardown_commands() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("api", ExecutionMode::OnHost, &[TestCommand::new("echo", ["hi"])])],
    );
    let pipeline = pipeline(scripted(&log, |_| exit(125)), repo, RunOptions::default());

    assert!(pipeline.run_tests().await.is_err());
    assert_eq!(log.calls(), vec!["docker run -d api:main-1a2b"]);
}

#[tokio::test]
async fn unrunnable_test_command_still_tears_down() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("api", ExecutionMode::OnHost, &[TestCommand::new("no-such-tool", ["x"])])],
    );

    let mut mock = MockExecutor::new();
    let l = log.clone();
    mock.expect_run_capturing().returning(move |program, args| {
        record(&l, program, args);
        Ok(happy("docker run -d"))
    });
    let l = log.clone();
    mock.expect_run_streaming().returning(move |program, args| {
        record(&l, program, args);
        Err(ExecError::Spawn {
            program: program.to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    });
    let l = log.clone();
    mock.expect_run().returning(move |program, args| {
        record(&l, program, args);
        Ok(0)
    });
    let pipeline = pipeline(mock, repo, RunOptions::default());

    let err = pipeline.run_tests().await.unwrap_err();

    assert!(matches!(err, PipelineError::TestExec { ref test_set, .. } if test_set == "api"));
    assert_eq!(log.count("docker stop c123"), 1);
    assert_eq!(log.count("docker rm c123"), 1);
}

#[tokio::test]
async fn teardown_failures_do_not_fail_the_run() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("unit", ExecutionMode::InTestContainer, &[TestCommand::new("npm", ["test"])])],
    );
    let mock = scripted(&log, |line| {
        if line.starts_with("docker stop") || line.starts_with("docker rm") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let pipeline = pipeline(mock, repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(log.count("docker stop c123"), 1);
    assert_eq!(log.count("docker rm c123"), 1);
}

#[tokio::test]
async fn sets_run_in_declared_order_each_with_own_container() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![
            set("first", ExecutionMode::InTestContainer, &[TestCommand::new("a", Vec::<String>::new())]),
            set("second", ExecutionMode::InTestContainer, &[TestCommand::new("b", Vec::<String>::new())]),
        ],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    pipeline.run_tests().await.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "docker run -d api:main-1a2b",
            "docker exec c123 a",
            "docker stop c123",
            "docker rm c123",
            "docker run -d api:main-1a2b",
            "docker exec c123 b",
            "docker stop c123",
            "docker rm c123",
        ]
    );
}

#[tokio::test]
async fn lifecycle_teardown_of_empty_handle_is_noop() {
    let log = CallLog::default();
    let docker = DockerClient::with_executor(scripted(&log, happy));

    ContainerLifecycle::new(&docker, false)
        .teardown(ContainerHandle::none())
        .await;

    assert!(log.calls().is_empty());
}

// ── Readiness ──

#[tokio::test]
async fn readiness_waits_after_setup_and_before_each_command() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![
            set("env", ExecutionMode::HostOnly, &[TestCommand::new("true", Vec::<String>::new())]),
            set(
                "api",
                ExecutionMode::OnHost,
                &[curl_health(), TestCommand::new("echo", ["done"])],
            ),
        ],
    );
    let docker = DockerClient::with_executor(scripted(&log, happy));
    let wait = CountingWait::default();

    TestDispatcher::new(&docker, &wait, &repo, &RunOptions::default())
        .run_all(&repo.tests)
        .await
        .unwrap();

    assert_eq!(wait.started.load(Ordering::SeqCst), 2);
    assert_eq!(wait.commands.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn fixed_delay_sleeps_before_tests() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set(
            "api",
            ExecutionMode::OnHost,
            &[curl_health(), TestCommand::new("echo", ["done"])],
        )],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default())
        .with_readiness(FixedDelay::default());
    let start = tokio::time::Instant::now();

    pipeline.run_tests().await.unwrap();

    // 2s after start + 2s before each of the two commands
    assert!(start.elapsed() >= Duration::from_secs(6));
}

// ── Build gating ──

#[tokio::test]
async fn dirty_production_tree_never_builds() {
    let log = CallLog::default();
    let mock = scripted(&log, |line| {
        if line.contains("diff-index") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let pipeline = pipeline(mock, repo("production", vec![]), RunOptions::default());

    let err = pipeline.make_and_test().await.unwrap_err();

    assert!(matches!(err, PipelineError::DirtyWorkdir));
    assert!(!log.any_starts_with("docker build"));
}

#[tokio::test]
async fn untracked_files_block_production_build() {
    let log = CallLog::default();
    let mock = scripted(&log, |line| {
        if line.contains("ls-files") {
            CommandResult {
                exit_code: 0,
                stdout: "scratch.txt\n".to_owned(),
            }
        } else {
            happy(line)
        }
    });
    let pipeline = pipeline(mock, repo("production", vec![]), RunOptions::default());

    assert!(matches!(pipeline.build().await, Err(PipelineError::DirtyWorkdir)));
    assert!(!log.any_starts_with("docker build"));
}

#[tokio::test]
async fn override_builds_without_consulting_git() {
    let log = CallLog::default();
    let mock = scripted(&log, |line| {
        if line.starts_with("git") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let options = RunOptions {
        override_dirty_workdir: true,
        ..RunOptions::default()
    };
    let pipeline = pipeline(mock, repo("production", vec![]), options);

    pipeline.build().await.unwrap();

    assert!(!log.any_starts_with("git"));
    assert_eq!(log.calls(), vec!["docker build -t api:main-1a2b /src/api"]);
}

#[tokio::test]
async fn clean_production_tree_builds() {
    let log = CallLog::default();
    let pipeline = pipeline(scripted(&log, happy), repo("production", vec![]), RunOptions::default());

    pipeline.build().await.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "git -C /src/api diff-index --quiet HEAD --",
            "git -C /src/api ls-files --others --exclude-standard",
            "docker build -t api:main-1a2b /src/api",
        ]
    );
}

#[tokio::test]
async fn non_production_skips_dirty_check() {
    let log = CallLog::default();
    let pipeline = pipeline(scripted(&log, happy), repo("staging", vec![]), RunOptions::default());

    pipeline.build().await.unwrap();

    assert!(!log.any_starts_with("git"));
}

#[tokio::test]
async fn build_failure_stops_before_tests() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("unit", ExecutionMode::HostOnly, &[TestCommand::new("echo", ["hi"])])],
    );
    let mock = scripted(&log, |line| {
        if line.starts_with("docker build") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let pipeline = pipeline(mock, repo, RunOptions::default());

    let err = pipeline.make_and_test().await.unwrap_err();

    assert!(matches!(err, PipelineError::BuildFailed { exit_code: 1, .. }));
    assert_eq!(log.calls(), vec!["docker build -t api:main-1a2b /src/api"]);
}

#[tokio::test]
async fn not_logged_in_fails_before_anything_runs() {
    let log = CallLog::default();
    let pipeline = Pipeline::new(
        DockerClient::with_executor(scripted(&log, happy)),
        repo("staging", vec![]),
        RunOptions::default(),
    );

    let err = pipeline.make_and_test().await.unwrap_err();

    assert!(matches!(err, PipelineError::NotLoggedIn { ref registry } if registry == "eu.gcr.io"));
    assert!(log.calls().is_empty());
}

// ── Tag and push ──

#[tokio::test]
async fn make_and_test_tags_after_tests() {
    let log = CallLog::default();
    let repo = repo(
        "staging",
        vec![set("env", ExecutionMode::HostOnly, &[TestCommand::new("echo", ["hi"])])],
    );
    let pipeline = pipeline(scripted(&log, happy), repo, RunOptions::default());

    let outcome = pipeline.make_and_test().await.unwrap();

    assert_eq!(outcome, PipelineOutcome::Tested);
    assert_eq!(
        log.calls(),
        vec![
            "docker build -t api:main-1a2b /src/api",
            "echo hi",
            "docker tag api:main-1a2b eu.gcr.io/proj/api:main-1a2b",
        ]
    );
}

#[tokio::test]
async fn tag_failure_is_fatal() {
    let log = CallLog::default();
    let mock = scripted(&log, |line| {
        if line.starts_with("docker tag") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let options = RunOptions {
        force_push_image: true,
        ..RunOptions::default()
    };
    let pipeline = pipeline(mock, repo("staging", vec![]), options);

    let err = pipeline
        .make_and_push(&mut Cursor::new(""), &mut Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::TagFailed { exit_code: 1, .. }));
    assert!(!log.any_starts_with("docker push"));
}

#[tokio::test]
async fn declined_prompt_does_not_push() {
    let log = CallLog::default();
    let pipeline = pipeline(scripted(&log, happy), repo("staging", vec![]), RunOptions::default());
    let mut prompt = Vec::new();

    let outcome = pipeline
        .make_and_push(&mut Cursor::new("n\n"), &mut prompt)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::PushDeclined);
    assert!(!log.any_starts_with("docker push"));
    assert!(String::from_utf8(prompt).unwrap().contains("Press 'y' to push"));
}

#[tokio::test]
async fn end_of_input_declines() {
    let log = CallLog::default();
    let pipeline = pipeline(scripted(&log, happy), repo("staging", vec![]), RunOptions::default());

    let outcome = pipeline
        .make_and_push(&mut Cursor::new(""), &mut Vec::new())
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::PushDeclined);
}

#[tokio::test]
async fn confirmed_prompt_pushes_full_path() {
    let log = CallLog::default();
    let pipeline = pipeline(scripted(&log, happy), repo("staging", vec![]), RunOptions::default());

    let outcome = pipeline
        .make_and_push(&mut Cursor::new("Y\n"), &mut Vec::new())
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Pushed);
    assert_eq!(
        log.calls().last().map(String::as_str),
        Some("docker push eu.gcr.io/proj/api:main-1a2b")
    );
}

#[tokio::test]
async fn force_push_skips_prompt() {
    let log = CallLog::default();
    let options = RunOptions {
        force_push_image: true,
        ..RunOptions::default()
    };
    let pipeline = pipeline(scripted(&log, happy), repo("staging", vec![]), options);
    let mut prompt = Vec::new();

    let outcome = pipeline
        .make_and_push(&mut Cursor::new("n\n"), &mut prompt)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Pushed);
    assert!(prompt.is_empty());
    assert_eq!(log.count("docker push eu.gcr.io/proj/api:main-1a2b"), 1);
}

#[tokio::test]
async fn push_failure_is_fatal() {
    let log = CallLog::default();
    let mock = scripted(&log, |line| {
        if line.starts_with("docker push") {
            exit(1)
        } else {
            happy(line)
        }
    });
    let options = RunOptions {
        force_push_image: true,
        ..RunOptions::default()
    };
    let pipeline = pipeline(mock, repo("staging", vec![]), options);

    let err = pipeline
        .make_and_push(&mut Cursor::new(""), &mut Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::PushFailed { exit_code: 1, .. }));
}
