use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Lines;
    "BSPLIN" ["p1", "p2", "p3", "p4", "p5", "p6", "xv1", "yv1", "zv1", "xv6", "yv6", "zv6"] -> LineNumber, "Generate a single line from a spline fit to a series of keypoints";
    "CIRCLE" ["pcent", "rad", "paxis", "pzero", "arc", "nseg"] -> LineNumbers, "Generate circular arc lines";
    "L" ["p1", "p2", "ndiv", "space", "xv1", "yv1", "zv1", "xv2", "yv2", "zv2"] -> LineNumber, "Define a line between two keypoints";
    "L2ANG" ["nl1", "nl2", "ang1", "ang2", "phit1", "phit2"] -> LineNumber, "Generate a line at an angle with two existing lines";
    "L2TAN" ["nl1", "nl2"] -> LineNumber, "Generate a line tangent to two lines";
    "LANG" ["nl1", "p3", "ang", "phit", "locat"] -> LineNumber, "Generate a straight line at an angle with a line";
    "LARC" ["p1", "p2", "pc", "rad"] -> LineNumber, "Define a circular arc";
    "LAREA" ["p1", "p2", "narea"] -> LineNumber, "Generate the shortest line between two keypoints on an area";
    "LCOMB" ["nl1", "nl2", "keep"] -> LineNumber, "Combine adjacent lines into one line";
    "LDELE" ["nl1", "nl2", "ninc", "kswp"], "Delete unmeshed lines";
    "LDIV" ["nl1", "ratio", "pdiv", "ndiv", "keep"], "Divide a single line into two or more lines";
    "LDRAG" ["nk1", "nk2", "nk3", "nk4", "nk5", "nk6", "nl1", "nl2", "nl3", "nl4", "nl5", "nl6"], "Generate lines by sweeping a keypoint pattern along a path";
    "LEXTND" ["nl1", "nk1", "dist", "keep"] -> LineNumber, "Extend a line at one end by using its slope";
    "LFILLT" ["nl1", "nl2", "rad", "pcent"] -> LineNumber, "Generate a fillet line between two intersecting lines";
    "LGEN" ["itime", "nl1", "nl2", "ninc", "dx", "dy", "dz", "kinc", "noelem", "imove"], "Generate additional lines from a pattern of lines";
    "LLIST" ["nl1", "nl2", "ninc", "lab"], "List the defined lines";
    "LPLOT" ["nl1", "nl2", "ninc"], "Display the selected lines";
    "LREVERSE" ["lnum", "noeflip"], "Reverse the normal of a line";
    "LROTAT" ["nk1", "nk2", "nk3", "nk4", "nk5", "nk6", "pax1", "pax2", "arc", "nseg"], "Generate circular lines by rotating a keypoint pattern about an axis";
    "LSSCALE" ["nl1", "nl2", "ninc", "rx", "ry", "rz", "kinc", "noelem", "imove"], "Generate a scaled set of lines from a pattern of lines";
    "LSTR" ["p1", "p2"] -> LineNumber, "Define a straight line irrespective of the active coordinate system";
    "LSUM" [], "Calculate and print geometry statistics of the selected lines";
    "LSYMM" ["ncomp", "nl1", "nl2", "ninc", "kinc", "noelem", "imove"], "Generate lines from a line pattern by symmetry reflection";
    "LTAN" ["nl1", "p3", "xv3", "yv3", "zv3"] -> LineNumber, "Generate a line at the end of and tangent to an existing line";
    "LTRAN" ["kcnto", "nl1", "nl2", "ninc", "kinc", "noelem", "imove"], "Transfer a pattern of lines to another coordinate system";
    "SPLINE" ["p1", "p2", "p3", "p4", "p5", "p6", "xv1", "yv1", "zv1", "xv6", "yv6", "zv6"] -> LineNumbers, "Generate a segmented spline through a series of keypoints";
    "SSLN" ["fact", "size"], "Select and display small lines in the model";
};
