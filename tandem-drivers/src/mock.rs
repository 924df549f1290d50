//! Mock digital pins for host tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin, OutputPin};

#[derive(Debug, Clone, Copy)]
pub struct MockError;

impl Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Ordered record of every write across a set of pins
pub type WriteLog = Rc<RefCell<Vec<(u8, bool)>>>;

/// Pin with a shared level and write log
#[derive(Clone)]
pub struct MockPin {
    pub id: u8,
    pub level: Rc<Cell<bool>>,
    pub fail: Rc<Cell<bool>>,
    log: WriteLog,
}

impl MockPin {
    pub fn new(id: u8, log: &WriteLog) -> Self {
        Self {
            id,
            level: Rc::new(Cell::new(false)),
            fail: Rc::new(Cell::new(false)),
            log: Rc::clone(log),
        }
    }

    pub fn is_set(&self) -> bool {
        self.level.get()
    }

    fn write(&mut self, high: bool) -> Result<(), MockError> {
        if self.fail.get() {
            return Err(MockError);
        }
        self.level.set(high);
        self.log.borrow_mut().push((self.id, high));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail.get() {
            return Err(MockError);
        }
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub fn new_log() -> WriteLog {
    Rc::new(RefCell::new(Vec::new()))
}
