use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{Stream, collector::Collector};

/// An error returned when a driving path of the collector is not satisfied.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect [`Output`] produced by the collector.
    ///
    /// [`Output`]: crate::collector::Collector::Output
    IncorrectOutput,
    /// The [`Iterator`] is not consumed as expected.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_path(self, name: &'static str) -> OfPath {
        OfPath {
            name,
            pred_error: self,
        }
    }
}

/// Helper to convert [`PredError`] into [`TestCaseError`].
struct OfPath {
    name: &'static str,
    pred_error: PredError,
}

impl From<OfPath> for TestCaseError {
    fn from(OfPath { name, pred_error }: OfPath) -> Self {
        Self::Fail(format!("`{name}` is implemented incorrectly: {pred_error:?}").into())
    }
}

/// Runs a collector through every way it can be driven and checks each result.
pub trait CollectorTesterExt {
    fn test_collector(&mut self) -> TestCaseResult;
}

/// Tester for the common case: a fresh iterator and a fresh collector per run.
///
/// `pred` receives a fresh copy of the input, the output of the collector, and
/// what the driver left in the iterator.
pub struct BasicCollectorTester<ItFac, ClFac, SbPred, Pred, I, C>
// `where` bound is needed otherwise we get "type annotation needed" for the input iterator.
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub collector_factory: ClFac,
    pub should_break_pred: SbPred,
    pub pred: Pred,
}

impl<ItFac, ClFac, SbPred, Pred, I, C> CollectorTesterExt
    for BasicCollectorTester<ItFac, ClFac, SbPred, Pred, I, C>
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    fn test_collector(&mut self) -> TestCaseResult {
        let should_break = (self.should_break_pred)((self.iter_factory)());

        // `accumulate()`
        {
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let mut accum = collector.supply();
            let has_stopped = iter
                .try_for_each(|item| collector.accumulate(&mut accum, item))
                .is_break();
            prop_assert_eq!(
                has_stopped,
                should_break,
                "`accumulate()` didn't break correctly"
            );
            (self.pred)((self.iter_factory)(), collector.finish(accum), &mut iter)
                .map_err(|e| e.of_path("accumulate()"))?;
        }

        // `collect_many()`
        {
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let mut accum = collector.supply();
            let has_stopped = collector.collect_many(&mut accum, &mut iter).is_break();
            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect_many()` didn't break correctly"
            );
            (self.pred)((self.iter_factory)(), collector.finish(accum), &mut iter)
                .map_err(|e| e.of_path("collect_many()"))?;
        }

        // `collect_then_finish()`
        {
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let output = collector.collect_then_finish(&mut iter);
            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_path("collect_then_finish()"))?;
        }

        // `Stream::collect()`, lending the same collector to two reductions.
        // The second one must not observe anything left over from the first.
        {
            let collector = (self.collector_factory)();
            for _ in 0..2 {
                let mut iter = (self.iter_factory)();
                let output = Stream::of(&mut iter).collect(&collector);
                (self.pred)((self.iter_factory)(), output, &mut iter)
                    .map_err(|e| e.of_path("Stream::collect()"))?;
            }
        }

        Ok(())
    }
}
