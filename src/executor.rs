use super::config::ExecutorConfig;
use super::cpu_instruction::microcode::MicrocodeError;
use super::cpu_instruction::LogLine;
use super::memory::AddressableIO;
use super::processing_unit::execute_step;
use super::registers::Registers;
use log::{debug, warn};
use std::error;
use std::fmt;

/// Return address pushed by `Executor::call`. Reaching it ends the call.
pub const CALL_SENTINEL: u16 = 0xFFFF;

pub type Result<T> = std::result::Result<T, ExecutionError>;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ExecutionError {
    Microcode(MicrocodeError),
    // ↓ steps executed, command pointer when the watchdog tripped
    Timeout(usize, u16),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExecutionError::Microcode(e) => write!(f, "execution failed: {}", e),
            ExecutionError::Timeout(steps, pc) => write!(
                f,
                "watchdog: no stop condition met after {} instructions, pc=${:04X}",
                steps, pc
            ),
        }
    }
}

impl error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ExecutionError::Microcode(e) => Some(e),
            ExecutionError::Timeout(_, _) => None,
        }
    }
}

impl From<MicrocodeError> for ExecutionError {
    fn from(err: MicrocodeError) -> ExecutionError {
        ExecutionError::Microcode(err)
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum StopReason {
    StopAddress(u16),
    SelfLoop(u16),
    Returned,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StopReason::StopAddress(addr) => write!(f, "stop address ${:04X} reached", addr),
            StopReason::SelfLoop(addr) => write!(f, "instruction at ${:04X} loops on itself", addr),
            StopReason::Returned => write!(f, "subroutine returned"),
        }
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub steps: usize,
    pub stop_reason: StopReason,
    /// Empty unless the executor keeps the trace.
    pub trace: Vec<LogLine>,
}

#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /*
     * run
     * Step through the program until the command pointer reaches a stop
     * address or an instruction jumps to itself. The stop address check
     * happens before the instruction there is executed.
     */
    pub fn run(&self, registers: &mut Registers, memory: &mut dyn AddressableIO) -> Result<RunOutcome> {
        self.run_until(registers, memory, |_| false)
    }

    /*
     * call
     * Push a sentinel return address then run the subroutine at `address`
     * until it returns to the sentinel. The configured stop conditions still
     * apply. A subroutine reaching $FFFF by itself is taken as returned, so
     * code located at CALL_SENTINEL cannot be called this way.
     */
    pub fn call(
        &self,
        registers: &mut Registers,
        memory: &mut dyn AddressableIO,
        address: u16,
    ) -> Result<RunOutcome> {
        registers
            .stack_push_word(memory, CALL_SENTINEL)
            .map_err(MicrocodeError::from)?;
        registers.command_pointer = address;
        debug!("calling subroutine at ${:04X}", address);

        self.run_until(registers, memory, |cp| cp == CALL_SENTINEL)
    }

    fn run_until<F>(
        &self,
        registers: &mut Registers,
        memory: &mut dyn AddressableIO,
        returned: F,
    ) -> Result<RunOutcome>
    where
        F: Fn(u16) -> bool,
    {
        let mut trace: Vec<LogLine> = Vec::new();
        let mut steps: usize = 0;

        let stop_reason = loop {
            let cp = registers.command_pointer;
            if returned(cp) {
                break StopReason::Returned;
            }
            if self.config.stop_addresses.contains(&cp) {
                break StopReason::StopAddress(cp);
            }
            if steps >= self.config.max_steps {
                warn!("watchdog tripped after {} instructions at ${:04X}", steps, cp);
                return Err(ExecutionError::Timeout(steps, cp));
            }

            let log_line = execute_step(registers, memory)?;
            steps += 1;
            if self.config.keep_trace {
                trace.push(log_line);
            }

            if self.config.stop_on_self_loop && registers.command_pointer == cp {
                break StopReason::SelfLoop(cp);
            }
        };
        debug!("run stopped after {} instructions: {}", steps, stop_reason);

        Ok(RunOutcome {
            steps,
            stop_reason,
            trace,
        })
    }
}
