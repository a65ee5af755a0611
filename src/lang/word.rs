use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<String, Word> = Word::ALL
        .iter()
        .map(|w| (w.to_string().to_ascii_lowercase(), *w))
        .collect();
);

/// ## Command mnemonics
///
/// Mnemonics are matched without regard to case.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    End,
    EndL,
    Set,
    FileOpen,
    FileReadAll,
    FileLength,
    In,
    If,
    EndIf,
    Preg,
    Delay,
    SetMouseDelay,
    SetKeyPressDelay,
    USleep,
    Print,
    Restart,
    Return,
    Break,
    Goto,
    ButtonPress,
    Down,
    Click,
    ButtonRelease,
    Up,
    Move,
    MotionNotify,
    RelativeMove,
    KeyCodePress,
    KeyCodeRelease,
    KeySym,
    KeySymPress,
    KeySymRelease,
    KeyStr,
    KeyStrPress,
    KeyStrRelease,
    Send,
    Exec,
    MoveWindow,
    Focus,
}

impl Word {
    pub const ALL: [Word; 39] = [
        Word::End,
        Word::EndL,
        Word::Set,
        Word::FileOpen,
        Word::FileReadAll,
        Word::FileLength,
        Word::In,
        Word::If,
        Word::EndIf,
        Word::Preg,
        Word::Delay,
        Word::SetMouseDelay,
        Word::SetKeyPressDelay,
        Word::USleep,
        Word::Print,
        Word::Restart,
        Word::Return,
        Word::Break,
        Word::Goto,
        Word::ButtonPress,
        Word::Down,
        Word::Click,
        Word::ButtonRelease,
        Word::Up,
        Word::Move,
        Word::MotionNotify,
        Word::RelativeMove,
        Word::KeyCodePress,
        Word::KeyCodeRelease,
        Word::KeySym,
        Word::KeySymPress,
        Word::KeySymRelease,
        Word::KeyStr,
        Word::KeyStrPress,
        Word::KeyStrRelease,
        Word::Send,
        Word::Exec,
        Word::MoveWindow,
        Word::Focus,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(&s.to_ascii_lowercase()).copied())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            End => "End",
            EndL => "EndL",
            Set => "Set",
            FileOpen => "FileOpen",
            FileReadAll => "FileReadAll",
            FileLength => "FileLength",
            In => "In",
            If => "If",
            EndIf => "EndIf",
            Preg => "Preg",
            Delay => "Delay",
            SetMouseDelay => "SetMouseDelay",
            SetKeyPressDelay => "SetKeyPressDelay",
            USleep => "USleep",
            Print => "Print",
            Restart => "Restart",
            Return => "Return",
            Break => "Break",
            Goto => "Goto",
            ButtonPress => "ButtonPress",
            Down => "Down",
            Click => "click",
            ButtonRelease => "ButtonRelease",
            Up => "Up",
            Move => "Move",
            MotionNotify => "MotionNotify",
            RelativeMove => "RelativeMove",
            KeyCodePress => "KeyCodePress",
            KeyCodeRelease => "KeyCodeRelease",
            KeySym => "KeySym",
            KeySymPress => "KeySymPress",
            KeySymRelease => "KeySymRelease",
            KeyStr => "KeyStr",
            KeyStrPress => "KeyStrPress",
            KeyStrRelease => "KeyStrRelease",
            Send => "Send",
            Exec => "Exec",
            MoveWindow => "MoveWindow",
            Focus => "Focus",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Word::from_string("Goto"), Some(Word::Goto));
        assert_eq!(Word::from_string("GOTO"), Some(Word::Goto));
        assert_eq!(Word::from_string("CLICK"), Some(Word::Click));
        assert_eq!(Word::from_string("endif"), Some(Word::EndIf));
        assert_eq!(Word::from_string("PICKLES"), None);
    }

    #[test]
    fn test_every_word_round_trips_its_name() {
        for word in Word::ALL.iter() {
            assert_eq!(Word::from_string(&word.to_string()), Some(*word));
        }
    }
}
