// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Polling instances until they settle in a state

use std::collections::HashSet;
use std::time::Duration;

use cvm_api::{DescribeInstancesRequest, Instance, InstanceState, operation_state};
use tencentcloud_common::Error;
use tokio::time::{Instant, sleep};

use crate::CvmClient;

/// DescribeInstances accepts at most this many ids per call
const MAX_IDS_PER_CALL: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Delay between polls
    pub interval: Duration,
    /// Give up once this much time has passed
    pub timeout: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: Duration::from_secs(600),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error(transparent)]
    Api(#[from] Error),

    #[error("instance {instance_id} failed to launch: {message}")]
    LaunchFailed { instance_id: String, message: String },

    #[error("{operation} failed on instance {instance_id}: {message}")]
    OperationFailed {
        instance_id: String,
        operation: String,
        message: String,
    },

    #[error("timed out after {elapsed:?} waiting for {pending:?} to reach {target}")]
    Timeout {
        target: InstanceState,
        elapsed: Duration,
        pending: Vec<String>,
    },
}

impl WaitError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Outcome of checking one instance against the target
enum Progress {
    Done,
    Pending,
    Failed(WaitError),
}

fn progress_of(instance: &Instance, target: InstanceState) -> Progress {
    let message = || {
        instance
            .latest_operation_error_msg
            .clone()
            .unwrap_or_default()
    };

    if instance.instance_state == InstanceState::LaunchFailed
        && target != InstanceState::LaunchFailed
    {
        return Progress::Failed(WaitError::LaunchFailed {
            instance_id: instance.instance_id.clone(),
            message: message(),
        });
    }

    match instance.latest_operation_state.as_deref() {
        Some(operation_state::FAILED) => Progress::Failed(WaitError::OperationFailed {
            instance_id: instance.instance_id.clone(),
            operation: instance.latest_operation.clone().unwrap_or_default(),
            message: message(),
        }),
        Some(operation_state::OPERATING) => Progress::Pending,
        _ if instance.instance_state == target => Progress::Done,
        _ => Progress::Pending,
    }
}

impl CvmClient {
    /// Poll DescribeInstances until every instance in `instance_ids` is in
    /// `target` with no operation in flight
    ///
    /// Fails as soon as an instance reports `LAUNCH_FAILED` or a failed
    /// latest operation. Instances not listed yet count as pending. On
    /// success the instances are returned in the order of `instance_ids`,
    /// once per distinct id.
    ///
    /// # Arguments
    /// * `instance_ids` - Instances to watch
    /// * `target` - State every instance must reach
    /// * `options` - Poll interval and overall timeout
    pub async fn wait_for_instances(
        &self,
        instance_ids: &[String],
        target: InstanceState,
        options: WaitOptions,
    ) -> Result<Vec<Instance>, WaitError> {
        let start = Instant::now();
        let mut seen = HashSet::new();
        let instance_ids: Vec<String> = instance_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        loop {
            let mut found = self.fetch_instances(&instance_ids).await?;
            let mut pending = Vec::new();
            let mut ready = Vec::with_capacity(instance_ids.len());

            for id in &instance_ids {
                let Some(position) = found.iter().position(|i| &i.instance_id == id) else {
                    pending.push(id.clone());
                    continue;
                };
                let instance = found.swap_remove(position);
                match progress_of(&instance, target) {
                    Progress::Done => ready.push(instance),
                    Progress::Pending => pending.push(id.clone()),
                    Progress::Failed(err) => return Err(err),
                }
            }

            if pending.is_empty() {
                return Ok(ready);
            }

            let elapsed = start.elapsed();
            if elapsed >= options.timeout {
                return Err(WaitError::Timeout {
                    target,
                    elapsed,
                    pending,
                });
            }

            tracing::debug!(
                %target,
                pending = pending.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "waiting for instances"
            );
            sleep(options.interval.min(options.timeout - elapsed)).await;
        }
    }

    async fn fetch_instances(&self, instance_ids: &[String]) -> Result<Vec<Instance>, Error> {
        let mut instances = Vec::with_capacity(instance_ids.len());
        for chunk in instance_ids.chunks(MAX_IDS_PER_CALL) {
            let request = DescribeInstancesRequest {
                instance_ids: chunk.to_vec(),
                limit: Some(MAX_IDS_PER_CALL as i64),
                ..Default::default()
            };
            instances.extend(self.describe_instances(&request).await?.instance_set);
        }
        Ok(instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(state: InstanceState, operation_state: Option<&str>) -> Instance {
        Instance {
            instance_id: "ins-r8hr2upy".to_string(),
            instance_state: state,
            latest_operation: Some("StopInstances".to_string()),
            latest_operation_state: operation_state.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn settled_in_target_is_done() {
        let i = instance(InstanceState::Stopped, Some(operation_state::SUCCESS));
        assert!(matches!(progress_of(&i, InstanceState::Stopped), Progress::Done));
    }

    #[test]
    fn operating_is_pending_even_in_target() {
        let i = instance(InstanceState::Running, Some(operation_state::OPERATING));
        assert!(matches!(progress_of(&i, InstanceState::Running), Progress::Pending));
    }

    #[test]
    fn other_state_is_pending() {
        let i = instance(InstanceState::Stopping, None);
        assert!(matches!(progress_of(&i, InstanceState::Stopped), Progress::Pending));
    }

    #[test]
    fn failed_operation_fails() {
        let i = instance(InstanceState::Running, Some(operation_state::FAILED));
        match progress_of(&i, InstanceState::Stopped) {
            Progress::Failed(WaitError::OperationFailed { operation, .. }) => {
                assert_eq!(operation, "StopInstances");
            }
            _ => panic!("expected an operation failure"),
        }
    }

    #[test]
    fn launch_failed_fails_unless_targeted() {
        let i = instance(InstanceState::LaunchFailed, None);
        assert!(matches!(
            progress_of(&i, InstanceState::Running),
            Progress::Failed(WaitError::LaunchFailed { .. })
        ));
        assert!(matches!(progress_of(&i, InstanceState::LaunchFailed), Progress::Done));
    }
}
