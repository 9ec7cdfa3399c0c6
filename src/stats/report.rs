use super::Profile;
use crate::cards::Category;
use crate::gameplay::Kind;
use std::fmt::{Display, Formatter, Result};

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} {} hands={}", self.player, self.game, self.hands)
    }
}

impl Profile {
    /// Multi-line report of every counter and derived metric.
    pub fn detail(&self) -> Detail<'_> {
        Detail(self)
    }
}

/// Long-form rendering of a [`Profile`].
///
/// Action kinds that never occurred and rank categories never
/// seen at showdown are left out.
pub struct Detail<'a>(&'a Profile);

impl Display for Detail<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let p = self.0;
        writeln!(f, "Hands:  {}  Hands Won:  {}", p.hands, p.handswon)?;
        writeln!(f, "Amount won:  {}  Put in pot:  {}  Rake:  {}", p.won, p.pip, p.rake)?;
        writeln!(f, "Check-x count: {}", p.cx())?;
        writeln!(f, "Check-x ratio: {}", p.cxr())?;
        writeln!(f, "Initiatives: {}", p.isstr())?;
        writeln!(f, "Show downs:  {}", p.showdownsseen)?;
        writeln!(f, "Show down wins:  {}", p.handswonshow)?;
        writeln!(f, "VPIP:  {:.1}%  PFR:  {:.1}%  AF:  {:.2}", p.vpip(), p.pfr(), p.af(false))?;
        writeln!(
            f,
            "Flops seen:  {:.1}%  Showdowns seen:  {:.1}%  Showdowns won:  {:.1}%  Hands won:  {:.1}%",
            p.fs(),
            p.ss(),
            p.sw(),
            p.hw()
        )?;
        writeln!(f, "Net:  {:+}  Net per hand:  {:+.2}", p.am(), p.amph())?;
        writeln!(f, "Actions:")?;
        for kind in Kind::all() {
            match p.actions(kind) {
                0 => continue,
                n => writeln!(f, "  {} times: {}", kind, n)?,
            }
        }
        writeln!(f, "Showdown ranks:")?;
        for category in Category::all() {
            let (won, lost) = (p.rankwon(category), p.ranklost(category));
            if won + lost == 0 {
                continue;
            }
            writeln!(
                f,
                "  {} times won {} times lost {} amount {}",
                category,
                won,
                lost,
                p.rankam(category)
            )?;
        }
        Ok(())
    }
}
