/*!
# Compatibility Notes

macroplay runs scripts written for the older X11 macro players. Most
scripts run unchanged. A few behaviors are kept on purpose because
scripts depend on them, and a few are deliberately different.

## Kept

 * Blocks do not nest. `If` skips to the first `EndIf` it finds.
 * `Goto` is a call. Every `Goto` is remembered until a `Return` or
   `Break`, which is why endless `Goto` loops eventually stop with
   `CALL STACK TOO DEEP`.
 * Duplicate labels are silently replaced by the last declaration.
 * A bare word that is neither a command nor a label does nothing.
 * Trailing ` if ` conditions are only checked on lines reached by
   stepping forward outside of `If` blocks.
 * A trailing condition that cannot be read never holds, so the line
   does nothing.
 * `Restart` does nothing.

## Changed

 * `EndIf` must be the first word of its line. Older players accepted
   any line containing the text `endif`.
 * `Goto` to an unknown label is logged and skipped instead of jumping
   to the first line.
 * Running off the end of the script inside a true `If` block, or
   skipping a false one with no `EndIf` after it, stops the script with
   `IF WITHOUT ENDIF` instead of reading past the end.
 * `KeyCodePress` and `KeyCodeRelease` read the whole number.
 * Computed whole numbers print in full, never in exponent form.
   Other computed numbers are still rounded to 6 significant digits,
   so `Set x 0.1 + 0.2` stores `0.3`.
 * `++` and `--` count from 0 unless the whole register is a number.
   Older players read the leading number, so `3 apples` became `4`.
 * Any number of `+` and `-` terms may be folded, with or without signs
   and exponents: `1 - 2 + 3e2` is `299`.
 * `Exec` children are waited on in the background so none are left
   behind as zombies.
*/
